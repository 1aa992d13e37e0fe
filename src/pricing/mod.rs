mod db;
mod types;

pub(crate) use db::PricingTable;
pub(crate) use types::PricingEntry;

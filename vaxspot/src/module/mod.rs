pub mod feed;
pub mod notify;
pub mod report;
pub mod site;

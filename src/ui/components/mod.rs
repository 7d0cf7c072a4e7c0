pub mod fetch_status;
pub mod toast;

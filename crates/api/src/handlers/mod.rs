pub mod leads;
pub mod status;

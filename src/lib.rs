// Crate root library declaration and module exports.
pub mod adhan;
pub mod context;
pub mod geo;
pub mod hijri;
pub mod logging;
pub mod model;
pub mod platform;
pub mod qibla;
pub mod storage;

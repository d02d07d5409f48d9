pub mod logging;
pub mod run;

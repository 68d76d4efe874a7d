pub mod pages;
pub mod run;
pub mod scan;

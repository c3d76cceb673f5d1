pub mod batch;
pub mod dataurl;
pub mod options;
pub mod svg;
pub mod terminal;

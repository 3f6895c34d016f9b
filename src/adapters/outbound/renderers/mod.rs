/// Report renderers - every display decision lives here.
pub mod csv_renderer;
pub mod json_renderer;
pub mod table_renderer;

pub use csv_renderer::CsvRenderer;
pub use json_renderer::JsonRenderer;
pub use table_renderer::TableRenderer;

pub mod api_status;
pub mod csv_results_display;
pub mod data_preview_modal;
pub mod data_uploader;
pub mod header;
pub mod results_display;
pub mod status_badge;

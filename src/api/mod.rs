pub mod analyze;
pub mod headers;
pub mod image;
pub mod palette;
pub mod size;

pub use analyze::{handle_analyze, AnalyzeParams, __path_handle_analyze};
pub use image::{handle_image_info, handle_load_image, LoadImageResponse};
pub use image::{__path_handle_image_info, __path_handle_load_image};
pub use palette::{
    handle_add_color, handle_delete_color, handle_edit_color, handle_list_palette, ColorRequest,
    PaletteResponse,
};
pub use palette::{
    __path_handle_add_color, __path_handle_delete_color, __path_handle_edit_color,
    __path_handle_list_palette,
};
pub use size::{handle_get_size, handle_set_size, SizeRequest, SizeResponse};
pub use size::{__path_handle_get_size, __path_handle_set_size};

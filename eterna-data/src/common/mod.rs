mod error;
mod level;
mod names;

pub use error::{
    Error,
    ErrorKind,
    invalid_configuration,
};
pub use level::Level;
pub use names::{
    display_name_from_id,
    id_from_display_name,
    move_display_name,
};

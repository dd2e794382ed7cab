mod move_data;

pub use move_data::{
    FAST_MOVE_SUFFIX,
    MoveData,
    MoveRecord,
    MoveUsage,
};

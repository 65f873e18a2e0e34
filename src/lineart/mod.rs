pub mod brightness_map;
pub mod channel_vec;
pub mod extract;
pub mod infer;
pub mod luma;
pub mod neighborhood;

pub mod constants;
pub mod noise;
pub mod ring;
pub mod shockwave;

pub mod pow;
pub mod std_ops;

pub mod maps;
pub mod tarkov;

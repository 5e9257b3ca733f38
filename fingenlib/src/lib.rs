//! fingenlib — библиотека для генерации синтетических банковских выписок (XML, CSV)

pub mod error;
pub mod model;
pub mod sampler;
pub mod tables;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod xml;
}

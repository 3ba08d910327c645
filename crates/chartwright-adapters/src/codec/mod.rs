//! Values document codecs.

mod yaml;

pub use yaml::YamlCodec;

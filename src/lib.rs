//! # huffpack
//!
//! Lossless Huffman compression for text.
//!
//! ```
//! use huffpack::compress_text;
//!
//! let (codec, artifact) = compress_text("aaabbc")?;
//! assert_eq!(codec.decompress(&artifact)?, "aaabbc");
//! # Ok::<(), huffpack::CodecError>(())
//! ```
//!
//! Artifacts hold only the padded bit stream, never the code table. Keep the
//! [`HuffmanCodec`] around, or save its [`KeyFile`], to decode them later.

pub mod bits;
pub mod codec;
pub mod codes;
pub mod decoder;
pub mod error;
pub mod frequency;
pub mod keyfile;
pub mod packer;
pub mod tree;

pub use codec::{HuffmanCodec, compress_text};
pub use codes::CodeTable;
pub use error::CodecError;
pub use frequency::FrequencyTable;
pub use keyfile::KeyFile;
pub use tree::{HuffmanNode, HuffmanTree};

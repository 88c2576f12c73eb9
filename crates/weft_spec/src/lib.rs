//! Weft Spec - Template and Format Spec Parsing
//!
//! Parsing front half of the weft formatting engine:
//! - [`spec`]: the per-field spec mini-language (`[[fill]align][sign][#][0][width][.precision][type]`)
//! - [`template`]: splitting a template into literal runs and replacement fields
//!
//! Both parsers are allocation-light and never touch output; layout is applied
//! by the `weft` crate.

pub mod spec;
pub mod template;

pub use spec::{parse_format_spec, Align, FormatSpec, FormatSpecError, FormatType, Sign};
pub use template::{parse_template, Field, Piece, Template, TemplateError};

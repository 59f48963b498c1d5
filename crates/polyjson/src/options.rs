/// Default nesting limit, counting containers and fallback hops alike.
pub const DEFAULT_MAX_DEPTH: usize = 254;

/// Codec flags for one encode call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Coerce non-string map keys (numbers, bools, null, scalars) to strings
    pub non_str_keys: bool,
    /// Write `NumericArray` values as nested arrays instead of handing them to the resolver
    pub serialize_numeric_arrays: bool,
    pub pretty: bool,
    /// Indentation size when `pretty` is set (default: 2 spaces)
    pub indent: usize,
    pub max_depth: usize,
}

impl Options {
    /// The composition used by `dumps`: key coercion and numeric arrays always on.
    pub fn for_dumps(pretty: bool) -> Self {
        Self {
            non_str_keys: true,
            serialize_numeric_arrays: true,
            pretty,
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            non_str_keys: false,
            serialize_numeric_arrays: false,
            pretty: false,
            indent: 2,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

pub mod cli;
pub mod grid;
pub mod input;
mod macros;

pub use self::input::{FromInput, Input, InputError};

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::{Error, Result};
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::{Grid, GridBuf};
    pub use crate::input::{FromInput, Input, InputError, Skip, Split, W, Ws};
    pub use ::macros::entry;
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use arrayvec::ArrayString;
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bittle::{Bits, BitsMut};
    pub use bstr::{BStr, ByteSlice};
    pub use fixed_heap::FixedHeap;
    pub use rustc_hash::{FxHashMap, FxHashSet};
}

/// Read the given input file and leak it so that parsed values can borrow
/// from it for the duration of the program.
pub fn input(path: &'static str, read_path: &str) -> anyhow::Result<Input> {
    use anyhow::{anyhow, Context};
    use std::fs;

    let data = fs::read(read_path).with_context(|| anyhow!("{path}"))?;
    Ok(Input::new(Box::leak(data.into_boxed_slice())))
}

/// Prepare an input processor.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::input(path, read_path)?, path)
    }};
}

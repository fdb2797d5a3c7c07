use core::marker::PhantomData;

use crate::input::{FromInput, Input, InputError};

/// Iterator over values parsed from an [Input], fused after the input runs
/// out or a parse fails.
pub struct Iter<'a, T> {
    input: &'a mut Input,
    done: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(input: &'a mut Input) -> Self {
        Self {
            input,
            done: false,
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for Iter<'_, T>
where
    T: FromInput,
{
    type Item = Result<T, InputError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.input.try_next() {
            Ok(Some(value)) => Some(Ok(value)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

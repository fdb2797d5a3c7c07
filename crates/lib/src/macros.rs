/// Helper macro to build an input processor.
#[macro_export]
macro_rules! from_input {
    (|$value:ident: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(@impl [$value]: $ty, $($rest)*);
    };

    (|$value:ident ($($inner:tt)*): $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(@impl [$value($($inner)*)]: $ty, $($rest)*);
    };

    (|($($pat:tt)*): $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(@impl [($($pat)*)]: $ty, $($rest)*);
    };

    (@impl [$($value:tt)*]: $ty:ty, $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::Input,
            ) -> core::result::Result<Option<Self>, $crate::input::InputError> {
                let original = *p;

                let Some(value) = $crate::input::FromInput::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::InputError::new(
                            span,
                            $crate::input::ErrorKind::Boxed(e),
                        ))
                    }
                }
            }
        }
    };
}

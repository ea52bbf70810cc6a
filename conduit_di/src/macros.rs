/// Declares a provider struct holding the given leaf values.
///
/// Each field type can then be built from the provider by cloning the
/// stored value. A `new` constructor taking all fields in order is
/// generated as well.
#[macro_export]
macro_rules! provider {
    ($(#[$meta:meta])* $vis:vis $ident:ident { $($field:ident: $ty:ty),* $(,)? }) => {
        $(#[$meta])*
        $vis struct $ident {
            cache: $crate::BuildCache,
            $($field: $ty,)*
        }

        impl $ident {
            $vis fn new($($field: $ty),*) -> Self {
                Self {
                    cache: ::core::default::Default::default(),
                    $($field,)*
                }
            }
        }

        impl $crate::Provider for $ident {
            fn cache(&mut self) -> &mut $crate::BuildCache {
                &mut self.cache
            }
        }

        $(
            impl $crate::Build<$ident> for $ty {
                fn build(provider: &mut $ident) -> Self {
                    ::core::clone::Clone::clone(&provider.$field)
                }
            }
        )*
    };
}

/// Declares one symbol table of the Arnold C API.
///
/// Every entry produces a function pointer field on the table, resolved once
/// when the library is opened, and a free `unsafe fn` of the same name that
/// calls through the process-wide table. Reference parameters of the C++
/// header (`const AtVector&`) are declared as pointers.
macro_rules! arnold_api {
    (
        $(#[$table_meta:meta])*
        pub struct $table:ident => $field:ident {
            $(
                $(#[$fn_meta:meta])*
                fn $name:ident($($arg:ident: $arg_ty:ty),* $(,)?) $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[$table_meta])*
        pub struct $table {
            $(
                pub $name: unsafe extern "C" fn($($arg_ty),*) $(-> $ret)?,
            )*
        }

        impl $table {
            pub(crate) fn resolve(
                library: &::libloading::Library,
            ) -> ::std::result::Result<Self, crate::LoadError> {
                Ok(Self {
                    $(
                        $name: crate::api::symbol(library, stringify!($name))?,
                    )*
                })
            }
        }

        $(
            $(#[$fn_meta])*
            #[inline]
            pub unsafe fn $name($($arg: $arg_ty),*) $(-> $ret)? {
                // SAFETY: caller upholds the native function's contract
                unsafe { (crate::api::api().$field.$name)($($arg),*) }
            }
        )*
    };
}

pub(crate) use arnold_api;

/// Declares zero-sized stand-ins for types whose layout only the native
/// library knows. They are only ever used behind pointers.
macro_rules! opaque_handle {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            pub struct $name {
                _data: [u8; 0],
                _marker: ::core::marker::PhantomData<(*mut u8, ::core::marker::PhantomPinned)>,
            }
        )*
    };
}

pub(crate) use opaque_handle;

//! Helper macro for generating domain port error enums.
//!
//! Each variant lists its fields and a `thiserror` display string. The macro
//! derives `Debug`, `Clone`, `PartialEq`, `Eq`, and `thiserror::Error`, and adds
//! one snake_case constructor per variant whose `String` fields accept any
//! `impl Into<String>`. For example, the contact repository declares
//!
//! ```text
//! define_port_error! {
//!     pub enum ContactRepositoryError {
//!         Connection { message: String } =>
//!             "contact repository connection failed: {message}",
//!         Query { message: String } =>
//!             "contact repository query failed: {message}",
//!     }
//! }
//! ```
//!
//! and adapters build errors as `ContactRepositoryError::query(detail)`.
//! Fieldless variants get a zero-argument constructor.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructor generation checks for port error enums.
    define_port_error! {
        pub enum SamplePortError {
            Connection { message: String } => "connection failed: {message}",
            PoolSize { size: u32 } => "pool size: {size}",
            Timeout { message: String, seconds: u64 } => "timeout: {message} after {seconds}s",
            Closed => "storage closed",
        }
    }

    #[test]
    fn fieldless_variants_get_plain_constructors() {
        assert_eq!(SamplePortError::closed(), SamplePortError::Closed);
        assert_eq!(SamplePortError::closed().to_string(), "storage closed");
    }

    #[test]
    fn contact_port_errors_keep_driver_detail() {
        use crate::domain::ports::{ContactRepositoryError, StorageProbeError};

        let query = ContactRepositoryError::query("relation \"contacts\" does not exist");
        assert_eq!(
            query.to_string(),
            "contact repository query failed: relation \"contacts\" does not exist"
        );
        assert_eq!(
            StorageProbeError::unreachable("connection refused").to_string(),
            "connection refused"
        );
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SamplePortError::connection("refused");
        assert_eq!(err.to_string(), "connection failed: refused");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = SamplePortError::pool_size(10_u32);
        assert_eq!(err.to_string(), "pool size: 10");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = SamplePortError::timeout("checkout", 30_u64);
        assert_eq!(err.to_string(), "timeout: checkout after 30s");
    }
}

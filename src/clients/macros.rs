/// Generates `get_<record>` and `delete_<record>` for a client whose record
/// lives at the path produced by `$path_fn`.
macro_rules! impl_client_methods {
    ($client_name:ident, $record:ty, $record_name_snake:ident, $path_fn:ident($($arg:ident),+)) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $record_name_snake>](&self, $($arg: &str),+) -> Result<$record, crate::error::ApiError> {
                    tracing::debug!("Sending request");
                    self.inner.get(Self::$path_fn($($arg),+)).await
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<delete_ $record_name_snake>](&self, $($arg: &str),+) -> Result<(), crate::error::ApiError> {
                    tracing::debug!("Sending request");
                    self.inner.delete(Self::$path_fn($($arg),+)).await
                }
            }
        }
    };
}

macro_rules! impl_client_new {
    ($client_name:ident) => {
        impl $client_name {
            pub fn new(inner: crate::rest_framework::RestClient) -> Self {
                Self { inner }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $record:ty, $record_name_snake:ident, $path_fn:ident($($arg:ident),+)) => {
        impl_client_new!($client_name);
        impl_client_methods!($client_name, $record, $record_name_snake, $path_fn($($arg),+));
    };
}

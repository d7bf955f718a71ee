//! Consumer credentials held by the client.

/// Consumer id and private key body, fixed for the life of a client.
///
/// The private key is kept exactly as supplied: a base64 PKCS#8 body
/// without the `BEGIN`/`END` lines.
#[derive(Clone)]
pub struct Credentials {
    consumer_id: String,
    private_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_id", &self.consumer_id)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    pub fn new(consumer_id: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            consumer_id: consumer_id.into(),
            private_key: private_key.into(),
        }
    }

    pub fn consumer_id(&self) -> &str {
        &self.consumer_id
    }

    pub(crate) fn private_key(&self) -> &str {
        &self.private_key
    }
}

//! Challenge storage and verification.

use crate::constants::store_keys::CAPTCHA_PREFIX;
use crate::error::CaptchaError;
use crate::generator::CaptchaGenerator;
use crate::store::CaptchaStore;

impl CaptchaGenerator {
    /// Persist the last generated answer under its namespaced key.
    ///
    /// Fails with [`CaptchaError::Precondition`] before the first
    /// `generate` call. TTL enforcement is delegated to the store.
    pub async fn store_captcha<S: CaptchaStore>(
        &self,
        ttl_secs: u64,
        store: &S,
    ) -> Result<(), CaptchaError> {
        let (key, answer) = match (&self.last_key, &self.last_answer) {
            (Some(key), Some(answer)) => (key, answer),
            _ => {
                return Err(CaptchaError::Precondition(
                    "no challenge has been generated yet".to_string(),
                ));
            }
        };

        store
            .store(&format!("{CAPTCHA_PREFIX}{key}"), answer, ttl_secs)
            .await?;

        tracing::debug!(key = %key, ttl_secs, "stored captcha answer");
        Ok(())
    }

    /// Check `user_input` against the stored answer for `key`.
    ///
    /// Exact, case-sensitive match; no trimming. An absent or expired entry
    /// is a normal `false`, never an error. Store transport failures
    /// propagate.
    pub async fn verify_captcha<S: CaptchaStore>(
        &self,
        user_input: &str,
        key: &str,
        store: &S,
    ) -> Result<bool, CaptchaError> {
        let stored = store.fetch(&format!("{CAPTCHA_PREFIX}{key}")).await?;

        let success = match stored {
            Some(answer) => answer == user_input,
            None => {
                tracing::debug!(key = %key, "challenge expired or unknown");
                false
            }
        };

        if success {
            tracing::debug!(key = %key, "captcha verified successfully");
        }
        Ok(success)
    }
}

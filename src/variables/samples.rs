//! Sample values for template previews

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;

use super::placeholder::VariableLookup;

lazy_static! {
    static ref SAMPLE_VALUES: SampleValues = SampleValues::builtin();
}

/// Representative values substituted into previews.
///
/// Real delivery substitutes production data instead; these only give an
/// author something readable to look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleValues {
    values: BTreeMap<String, String>,
}

impl SampleValues {
    fn builtin() -> Self {
        let pairs: &[(&str, &str)] = &[
            // People & platform
            ("userName", "John Doe"),
            ("userEmail", "john.doe@example.com"),
            ("buyerName", "Maria Garcia"),
            ("sellerName", "Alex Chen"),
            ("senderName", "Sarah Miller"),
            ("platformName", "Marketplace"),
            ("supportEmail", "support@example.com"),
            ("dashboardUrl", "https://example.com/dashboard"),
            ("currentYear", "2024"),
            // Account & security
            ("otpCode", "123456"),
            ("expiryMinutes", "10"),
            ("verificationUrl", "https://example.com/verify?token=sample"),
            ("resetUrl", "https://example.com/reset-password?token=sample"),
            ("suspensionReason", "Repeated policy violations"),
            ("appealUrl", "https://example.com/appeals/new"),
            // Payments
            ("amount", "$150.00"),
            ("grossAmount", "$150.00"),
            ("feeAmount", "$7.50"),
            ("netAmount", "$142.50"),
            ("paymentMethod", "Visa ending in 4242"),
            ("transactionId", "TXN-2024-00123"),
            ("paymentDate", "March 15, 2024"),
            ("paymentUrl", "https://example.com/payments/TXN-2024-00123"),
            ("failureReason", "Card declined by issuer"),
            ("retryUrl", "https://example.com/checkout/retry"),
            ("payoutAmount", "$1,250.00"),
            ("payoutDate", "March 18, 2024"),
            ("bankAccount", "****6789"),
            ("payoutUrl", "https://example.com/payouts"),
            // Offers & listings
            ("offerTitle", "Vintage Leather Jacket"),
            ("listingTitle", "Vintage Leather Jacket"),
            ("offerAmount", "$120.00"),
            ("offerUrl", "https://example.com/offers/456"),
            ("declineReason", "The seller accepted another offer"),
            // Messaging
            ("messagePreview", "Hi! Is this item still available?"),
            ("conversationUrl", "https://example.com/messages/789"),
            // Orders & disputes
            ("orderNumber", "ORD-10045"),
            ("carrierName", "FedEx"),
            ("trackingNumber", "794612345678"),
            ("trackingUrl", "https://example.com/track/794612345678"),
            ("estimatedDelivery", "March 20, 2024"),
            ("disputeId", "DSP-3321"),
            ("disputeReason", "Item not as described"),
            ("disputeUrl", "https://example.com/disputes/DSP-3321"),
            ("responseDeadline", "March 22, 2024"),
        ];

        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Copy of these samples with `overrides` taking precedence
    pub fn with_overrides<S: std::hash::BuildHasher>(
        &self,
        overrides: &HashMap<String, String, S>,
    ) -> Self {
        let mut values = self.values.clone();
        for (name, value) in overrides {
            values.insert(name.clone(), value.clone());
        }
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Name/value pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl VariableLookup for SampleValues {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(Cow::Borrowed)
    }
}

/// The built-in sample values
pub fn sample_values() -> &'static SampleValues {
    &SAMPLE_VALUES
}

//! Built-in default compositions

use crate::block::{Block, BlockKind};

use super::types::DefaultComposition;

const FOOTER: &str = "You're receiving this email because you have an account on {{platformName}}.\n\
Questions? Contact us at {{supportEmail}}.";

fn greeting(text: &str) -> Block {
    Block::with_id("", BlockKind::Greeting, text)
}

fn text(text: &str) -> Block {
    Block::with_id("", BlockKind::Text, text)
}

fn heading(text: &str, size: &str) -> Block {
    Block::with_id("", BlockKind::Heading, text).with_property("size", size)
}

fn button(label: &str, url: &str, color: &str) -> Block {
    Block::with_id("", BlockKind::Button, label)
        .with_property("url", url)
        .with_property("color", color)
}

fn callout(kind: BlockKind, text: &str) -> Block {
    Block::with_id("", kind, text)
}

fn details(rows: &str) -> Block {
    Block::with_id("", BlockKind::DetailsTable, rows)
}

fn amount(figure: &str, label: &str, style: &str) -> Block {
    Block::with_id("", BlockKind::AmountDisplay, figure)
        .with_property("label", label)
        .with_property("style", style)
}

fn steps(items: &str) -> Block {
    Block::with_id("", BlockKind::NumberedList, items)
}

fn footer() -> Block {
    Block::with_id("", BlockKind::Footer, FOOTER)
}

struct Entry {
    slug: &'static str,
    name: &'static str,
    category: &'static str,
    subject: &'static str,
    header_title: &'static str,
    header_color: &'static str,
    blocks: Vec<Block>,
}

impl From<Entry> for DefaultComposition {
    fn from(entry: Entry) -> Self {
        // Canonical IDs are `<slug>-<position>`
        let blocks = entry
            .blocks
            .into_iter()
            .enumerate()
            .map(|(i, block)| Block {
                id: format!("{}-{}", entry.slug, i + 1),
                ..block
            })
            .collect();

        DefaultComposition {
            slug: entry.slug.to_string(),
            name: entry.name.to_string(),
            category: entry.category.to_string(),
            subject: entry.subject.to_string(),
            header_title: entry.header_title.to_string(),
            header_color: entry.header_color.to_string(),
            blocks,
        }
    }
}

/// Every built-in composition, in listing order
pub(super) fn compositions() -> Vec<DefaultComposition> {
    let entries = vec![
        // Account
        Entry {
            slug: "welcome",
            name: "Welcome",
            category: "account",
            subject: "Welcome to {{platformName}}, {{userName}}!",
            header_title: "Welcome aboard",
            header_color: "#2563eb",
            blocks: vec![
                greeting("Hi {{userName}},"),
                text("Thanks for joining {{platformName}}. Your account is ready and you can start buying and selling right away."),
                heading("Get started in three steps", "small"),
                steps("Complete your profile\nVerify your payout details\nPublish your first listing"),
                button("Go to dashboard", "{{dashboardUrl}}", "primary"),
                footer(),
            ],
        },
        Entry {
            slug: "email-verification",
            name: "Email Verification",
            category: "account",
            subject: "Your {{platformName}} verification code: {{otpCode}}",
            header_title: "Verify your email",
            header_color: "#2563eb",
            blocks: vec![
                greeting("Hi {{userName}},"),
                text("Use the code below to verify your email address."),
                amount("{{otpCode}}", "Verification code", "default"),
                callout(
                    BlockKind::InfoBox,
                    "This code expires in {{expiryMinutes}} minutes.\nIf you didn't request it, you can ignore this email.",
                ),
                button("Verify email", "{{verificationUrl}}", "primary"),
                footer(),
            ],
        },
        Entry {
            slug: "password-reset",
            name: "Password Reset",
            category: "account",
            subject: "Reset your {{platformName}} password",
            header_title: "Password reset",
            header_color: "#4b5563",
            blocks: vec![
                greeting("Hi {{userName}},"),
                text("We received a request to reset the password for {{userEmail}}."),
                button("Reset password", "{{resetUrl}}", "primary"),
                callout(
                    BlockKind::WarningBox,
                    "This link expires in {{expiryMinutes}} minutes. If you didn't ask for a reset, your password stays unchanged.",
                ),
                footer(),
            ],
        },
        Entry {
            slug: "account-suspended",
            name: "Account Suspended",
            category: "account",
            subject: "Your {{platformName}} account has been suspended",
            header_title: "Account suspended",
            header_color: "#dc2626",
            blocks: vec![
                greeting("Hi {{userName}},"),
                callout(
                    BlockKind::ErrorBox,
                    "Your account has been suspended.\nReason: {{suspensionReason}}",
                ),
                text("While suspended you can't publish listings, make offers or receive payouts."),
                heading("What you can do", "small"),
                steps("Review our community guidelines\nSubmit an appeal with any supporting details\nWait for our team to review your appeal"),
                button("Submit an appeal", "{{appealUrl}}", "danger"),
                footer(),
            ],
        },
        // Payments
        Entry {
            slug: "payment-received",
            name: "Payment Received",
            category: "payments",
            subject: "You received a payment of {{amount}}",
            header_title: "Payment received",
            header_color: "#16a34a",
            blocks: vec![
                greeting("Hi {{userName}},"),
                text("Good news! {{buyerName}} paid for {{offerTitle}}."),
                amount("{{amount}}", "Amount received", "success"),
                details("Gross amount:{{grossAmount}}\nPlatform fee:{{feeAmount}}\nNet amount:{{netAmount}}\nPayment method:{{paymentMethod}}\nTransaction ID:{{transactionId}}\nDate:{{paymentDate}}"),
                button("View payment", "{{paymentUrl}}", "success"),
                footer(),
            ],
        },
        Entry {
            slug: "payment-failed",
            name: "Payment Failed",
            category: "payments",
            subject: "Your payment of {{amount}} could not be processed",
            header_title: "Payment failed",
            header_color: "#dc2626",
            blocks: vec![
                greeting("Hi {{userName}},"),
                callout(
                    BlockKind::ErrorBox,
                    "We couldn't process your payment for {{offerTitle}}.\nReason: {{failureReason}}",
                ),
                details("Amount:{{amount}}\nPayment method:{{paymentMethod}}\nTransaction ID:{{transactionId}}"),
                text("No money was taken from your account. Please update your payment details and try again."),
                button("Retry payment", "{{retryUrl}}", "danger"),
                footer(),
            ],
        },
        Entry {
            slug: "payout-sent",
            name: "Payout Sent",
            category: "payments",
            subject: "Your payout of {{payoutAmount}} is on its way",
            header_title: "Payout sent",
            header_color: "#16a34a",
            blocks: vec![
                greeting("Hi {{userName}},"),
                text("We've sent your earnings to your bank account."),
                amount("{{payoutAmount}}", "Payout amount", "success"),
                details("Bank account:{{bankAccount}}\nPayout date:{{payoutDate}}"),
                callout(
                    BlockKind::InfoBox,
                    "Depending on your bank, funds usually arrive within 1-3 business days.",
                ),
                button("View payouts", "{{payoutUrl}}", "gray"),
                footer(),
            ],
        },
        // Offers
        Entry {
            slug: "offer-received",
            name: "Offer Received",
            category: "offers",
            subject: "New offer on {{offerTitle}}: {{offerAmount}}",
            header_title: "You have a new offer",
            header_color: "#7c3aed",
            blocks: vec![
                greeting("Hi {{sellerName}},"),
                text("{{buyerName}} made an offer on your listing {{offerTitle}}."),
                amount("{{offerAmount}}", "Offer amount", "default"),
                button("Review offer", "{{offerUrl}}", "primary"),
                footer(),
            ],
        },
        Entry {
            slug: "offer-accepted",
            name: "Offer Accepted",
            category: "offers",
            subject: "Your offer on {{offerTitle}} was accepted",
            header_title: "Offer accepted",
            header_color: "#16a34a",
            blocks: vec![
                greeting("Hi {{buyerName}},"),
                callout(
                    BlockKind::SuccessBox,
                    "{{sellerName}} accepted your offer of {{offerAmount}} for {{offerTitle}}.",
                ),
                heading("Next steps", "small"),
                steps("Complete the payment within 48 hours\nWait for the seller to ship your item\nConfirm delivery once it arrives"),
                button("Complete payment", "{{offerUrl}}", "success"),
                footer(),
            ],
        },
        Entry {
            slug: "offer-declined",
            name: "Offer Declined",
            category: "offers",
            subject: "Update on your offer for {{offerTitle}}",
            header_title: "Offer declined",
            header_color: "#d97706",
            blocks: vec![
                greeting("Hi {{buyerName}},"),
                callout(
                    BlockKind::WarningBox,
                    "Your offer of {{offerAmount}} for {{offerTitle}} was declined.\n{{declineReason}}",
                ),
                text("Don't give up. You can make a new offer or browse similar listings."),
                button("View listing", "{{offerUrl}}", "warning"),
                footer(),
            ],
        },
        // Messaging
        Entry {
            slug: "new-message",
            name: "New Message",
            category: "messaging",
            subject: "New message from {{senderName}}",
            header_title: "New message",
            header_color: "#0891b2",
            blocks: vec![
                greeting("Hi {{userName}},"),
                text("{{senderName}} sent you a message about {{listingTitle}}:"),
                callout(BlockKind::InfoBox, "{{messagePreview}}"),
                button("Reply", "{{conversationUrl}}", "primary"),
                footer(),
            ],
        },
        // Orders
        Entry {
            slug: "order-shipped",
            name: "Order Shipped",
            category: "orders",
            subject: "Order {{orderNumber}} has shipped",
            header_title: "Your order is on its way",
            header_color: "#2563eb",
            blocks: vec![
                greeting("Hi {{buyerName}},"),
                text("{{sellerName}} shipped {{listingTitle}}."),
                details("Order number:{{orderNumber}}\nCarrier:{{carrierName}}\nTracking number:{{trackingNumber}}\nEstimated delivery:{{estimatedDelivery}}"),
                button("Track package", "{{trackingUrl}}", "primary"),
                footer(),
            ],
        },
        Entry {
            slug: "dispute-opened",
            name: "Dispute Opened",
            category: "orders",
            subject: "A dispute was opened for order {{orderNumber}}",
            header_title: "Dispute opened",
            header_color: "#d97706",
            blocks: vec![
                greeting("Hi {{sellerName}},"),
                callout(
                    BlockKind::WarningBox,
                    "{{buyerName}} opened a dispute for order {{orderNumber}}.\nPlease respond by {{responseDeadline}}.",
                ),
                details("Dispute ID:{{disputeId}}\nReason:{{disputeReason}}\nAmount:{{amount}}"),
                heading("How to respond", "small"),
                steps("Review the buyer's claim\nUpload photos or tracking information\nPropose a resolution"),
                button("Respond to dispute", "{{disputeUrl}}", "warning"),
                footer(),
            ],
        },
    ];

    entries.into_iter().map(DefaultComposition::from).collect()
}

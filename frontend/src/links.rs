use crate::config;

pub fn whatsapp() -> String {
    format!("https://wa.me/{}", config::WHATSAPP_NUMBER)
}

/// Pre-filled WhatsApp enquiry for one product. The whole message is
/// percent-encoded, including the typographic apostrophe (`%E2%80%99`),
/// so links already shared in chats keep resolving to the same text.
pub fn product_enquiry(size: &str) -> String {
    let message = format!(
        "Hello, I\u{2019}d like to enquire about the {} package of vermicompost.",
        size
    );
    format!("{}?text={}", whatsapp(), urlencoding::encode(&message))
}

pub fn phone() -> String {
    format!("tel:{}", config::PHONE)
}

pub fn email() -> String {
    format!("mailto:{}", config::EMAIL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PRODUCTS;

    #[test]
    fn one_kg_message_is_fully_encoded() {
        assert_eq!(
            product_enquiry("1 kg"),
            "https://wa.me/919876109062?text=Hello%2C%20I%E2%80%99d%20like%20to%20enquire%20about%20the%201%20kg%20package%20of%20vermicompost."
        );
    }

    #[test]
    fn each_card_link_carries_its_own_size() {
        for product in PRODUCTS {
            let link = product_enquiry(product.size);
            let encoded_size = product.size.replace(' ', "%20");
            assert!(
                link.contains(&format!("about%20the%20{}%20package", encoded_size)),
                "{} missing from {}",
                product.size,
                link
            );
            assert!(!link.contains(' '));
        }
    }

    #[test]
    fn contact_links_are_verbatim() {
        assert_eq!(whatsapp(), "https://wa.me/919876109062");
        assert_eq!(phone(), "tel:+919876109062");
        assert_eq!(email(), "mailto:birgienterprises@gmail.com");
    }
}

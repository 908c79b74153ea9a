//! The shop assistant persona and product catalog.
//!
//! The persona is sent as the system message of every completion request.
//! The catalog backs the static `/prices` reply, so both must list the same
//! products and prices.

/// A product sold by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    /// Display name.
    pub name: &'static str,
    /// Price in rubles.
    pub price_rub: u32,
    /// Short note shown next to the price, if any.
    pub note: Option<&'static str>,
}

/// Everything the shop sells, in display order.
pub const CATALOG: [CatalogItem; 4] = [
    CatalogItem {
        name: "Готовое резюме",
        price_rub: 500,
        note: None,
    },
    CatalogItem {
        name: "Индивидуальное резюме",
        price_rub: 1500,
        note: None,
    },
    CatalogItem {
        name: "Сопроводительное письмо",
        price_rub: 800,
        note: None,
    },
    CatalogItem {
        name: "Пакет \"Успешный старт\"",
        price_rub: 2000,
        note: Some("резюме + письмо + советы"),
    },
];

/// Default system instruction for the shop assistant.
pub const DEFAULT_PERSONA: &str = r#"Ты — дружелюбный ИИ-консультант в Telegram-магазине по продаже резюме и сопроводительных писем.

Твоя задача: помогать клиентам выбирать товары, отвечать на вопросы и принимать заказы.

Товары:
1. "Готовое резюме" — 500 рублей (базовый шаблон)
2. "Индивидуальное резюме" — 1500 рублей (составляем под конкретную вакансию)
3. "Сопроводительное письмо" — 800 рублей (индивидуальное)
4. "Пакет 'Успешный старт'" — 2000 рублей (резюме + сопроводительное письмо + советы)

Правила общения:
- Будь вежливым и приветливым
- Отвечай на русском языке
- Если спрашивают про цены — называй сразу
- Если клиент готов купить — попроси написать: название товара, имя и email
- После заказа поблагодари и скажи, что с клиентом свяжутся

Будь полезным и помогай клиентам сделать правильный выбор!"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_lists_every_catalog_price() {
        for item in CATALOG {
            assert!(
                DEFAULT_PERSONA.contains(&format!("{} рублей", item.price_rub)),
                "persona is missing the price of {}",
                item.name
            );
        }
    }

    #[test]
    fn test_catalog_prices() {
        let prices: Vec<u32> = CATALOG.iter().map(|i| i.price_rub).collect();
        assert_eq!(prices, vec![500, 1500, 800, 2000]);
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::holdings::{enrich, Holding};
    use foliotrack_market_data::Quote;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn holding(ticker: &str, sector: &str, price: Decimal, qty: i64) -> Holding {
        Holding {
            ticker: ticker.to_string(),
            particular: format!("{} Ltd", ticker),
            sector: sector.to_string(),
            purchase_price: price,
            qty,
            exchange: "NSE".to_string(),
        }
    }

    fn quote(ticker: &str, cmp: Decimal) -> Quote {
        Quote {
            ticker: ticker.to_string(),
            cmp,
            trailing_pe: dec!(24.5),
            eps_trailing_twelve_months: dec!(12.1),
            exchange: "NSI".to_string(),
            change: dec!(1.25),
            change_percent: dec!(0.8),
        }
    }

    #[test]
    fn matched_holding_gets_full_derivation() {
        // Scenario: purchase 100 x10, current price 120
        let holdings = vec![holding("X", "Power", dec!(100), 10)];
        let quotes = vec![quote("X", dec!(120))];

        let enriched = enrich(&holdings, &quotes).unwrap();
        assert_eq!(enriched.len(), 1);

        let e = &enriched[0];
        assert_eq!(e.investment, dec!(1000));
        assert_eq!(e.present_value, dec!(1200));
        assert_eq!(e.gain, dec!(20));
        assert_eq!(e.total_gain, dec!(200));
        assert_eq!(e.gain_percent, dec!(2));
        assert_eq!(e.total_gain_percent, dec!(20));

        // Quote-sourced fields carried over
        assert_eq!(e.cmp, dec!(120));
        assert_eq!(e.trailing_pe, dec!(24.5));
        assert_eq!(e.eps_trailing_twelve_months, dec!(12.1));
        assert_eq!(e.exchange, "NSI");
    }

    #[test]
    fn unmatched_holding_defaults_to_zero_quote() {
        // Scenario: purchase 50 x5, no quote for the ticker
        let holdings = vec![holding("Y", "Financials", dec!(50), 5)];
        let quotes = vec![quote("SOMETHING_ELSE", dec!(999))];

        let enriched = enrich(&holdings, &quotes).unwrap();
        let e = &enriched[0];

        assert_eq!(e.cmp, Decimal::ZERO);
        assert_eq!(e.trailing_pe, Decimal::ZERO);
        assert_eq!(e.eps_trailing_twelve_months, Decimal::ZERO);
        assert_eq!(e.investment, dec!(250));
        assert_eq!(e.present_value, Decimal::ZERO);
        assert_eq!(e.gain, dec!(-50));
        assert_eq!(e.total_gain, dec!(-250));
        assert_eq!(e.gain_percent, dec!(-20));
        assert_eq!(e.total_gain_percent, dec!(-100));

        // Exchange falls back to the holding's own
        assert_eq!(e.exchange, "NSE");
    }

    #[test]
    fn output_preserves_length_and_order() {
        let holdings = vec![
            holding("C", "Power", dec!(10), 1),
            holding("A", "Financials", dec!(20), 2),
            holding("B", "Power", dec!(30), 3),
            holding("A", "Financials", dec!(25), 1),
        ];
        let quotes = vec![quote("A", dec!(21)), quote("B", dec!(31))];

        let enriched = enrich(&holdings, &quotes).unwrap();
        assert_eq!(enriched.len(), holdings.len());
        let order: Vec<&str> = enriched.iter().map(|e| e.ticker.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B", "A"]);
    }

    #[test]
    fn first_matching_quote_wins_over_duplicates() {
        let holdings = vec![holding("X", "Power", dec!(100), 10)];
        let quotes = vec![quote("X", dec!(110)), quote("X", dec!(990))];

        let enriched = enrich(&holdings, &quotes).unwrap();
        assert_eq!(enriched[0].cmp, dec!(110));
    }

    #[test]
    fn ticker_match_is_case_sensitive() {
        let holdings = vec![holding("abc", "Power", dec!(100), 10)];
        let quotes = vec![quote("ABC", dec!(110))];

        let enriched = enrich(&holdings, &quotes).unwrap();
        assert_eq!(enriched[0].cmp, Decimal::ZERO);
    }

    #[test]
    fn total_gain_is_exactly_present_value_minus_investment() {
        let holdings = vec![
            holding("A", "Power", dec!(33.33), 7),
            holding("B", "Financials", dec!(0.01), 100000),
            holding("C", "Technology", dec!(1648.55), 3),
        ];
        let quotes = vec![
            quote("A", dec!(41.17)),
            quote("B", dec!(0.009)),
            quote("C", dec!(1650)),
        ];

        for e in enrich(&holdings, &quotes).unwrap() {
            assert_eq!(e.total_gain, e.present_value - e.investment);
        }
    }

    #[test]
    fn zero_investment_guards_the_percentages() {
        // qty 0 and price 0 both zero the investment
        let holdings = vec![
            holding("Z1", "Power", dec!(100), 0),
            holding("Z2", "Power", Decimal::ZERO, 10),
        ];
        let quotes = vec![quote("Z1", dec!(50)), quote("Z2", dec!(50))];

        for e in enrich(&holdings, &quotes).unwrap() {
            assert_eq!(e.investment, Decimal::ZERO);
            assert_eq!(e.gain_percent, Decimal::ZERO);
            assert_eq!(e.total_gain_percent, Decimal::ZERO);
        }
    }

    #[test]
    fn empty_quote_list_enriches_every_holding_with_defaults() {
        let holdings = vec![
            holding("A", "Power", dec!(10), 1),
            holding("B", "Financials", dec!(20), 2),
        ];

        let enriched = enrich(&holdings, &[]).unwrap();
        assert_eq!(enriched.len(), 2);
        for e in &enriched {
            assert_eq!(e.cmp, Decimal::ZERO);
            assert_eq!(e.total_gain, -e.investment);
        }
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let holdings = vec![holding("NEG", "Power", dec!(10), -1)];
        let err = enrich(&holdings, &[]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("NEG"));
    }

    #[test]
    fn negative_purchase_price_is_rejected() {
        let holdings = vec![holding("NEG", "Power", dec!(-10), 1)];
        assert!(enrich(&holdings, &[]).is_err());
    }

    #[test]
    fn serializes_to_dashboard_field_names() {
        let holdings = vec![holding("X", "Power", dec!(100), 10)];
        let quotes = vec![quote("X", dec!(120))];
        let enriched = enrich(&holdings, &quotes).unwrap();

        let json = serde_json::to_value(&enriched[0]).unwrap();
        assert!(json.get("purchasePrice").is_some());
        assert!(json.get("presentValue").is_some());
        assert!(json.get("trailingPE").is_some());
        assert!(json.get("epsTrailingTwelveMonths").is_some());
        assert!(json.get("totalGainPercent").is_some());
        // Numbers serialize as plain JSON numbers, not strings
        assert!(json["investment"].is_number());
    }
}

use comfy_table::{ContentArrangement, Table};
use tarot_core::deck::find;
use tarot_core::{Card, Suit, catalog};

pub fn run(id: Option<&str>, suit: Option<&str>, major: bool, json: bool) -> Result<(), String> {
    if let Some(id) = id {
        let card = find(id).ok_or_else(|| format!("unknown card id '{id}'"))?;
        return print_cards(&[card], json);
    }

    let suit = suit
        .map(|s| {
            Suit::parse(s)
                .ok_or_else(|| format!("unknown suit '{s}', use: wands, cups, swords, pentacles"))
        })
        .transpose()?;

    let cards: Vec<&Card> = catalog()
        .iter()
        .filter(|c| !major || c.is_major())
        .filter(|c| suit.is_none() || c.suit() == suit)
        .collect();

    print_cards(&cards, json)
}

fn print_cards(cards: &[&Card], json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(cards).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if cards.is_empty() {
        println!("  No cards found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "名称", "Name", "Arcana"]);

    for card in cards {
        let arcana = match card.suit() {
            Some(s) => s.to_string(),
            None => "Major".to_string(),
        };
        table.add_row(vec![&card.id, &card.name_local, &card.name_canonical, &arcana]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", cards.len());

    Ok(())
}

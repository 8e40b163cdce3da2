use campaigner_core::{CampaignGoal, Channel, Tone};
use console::style;

/// Handle the options command
pub fn handle_options_command() {
    for (title, rows) in option_tables() {
        println!("{}", style(title).cyan().bold());
        for (id, label) in rows {
            println!("  {id:<24} {label}");
        }
        println!();
    }
}

/// (identifier, label) pairs for each brief enumeration
fn option_tables() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    vec![
        (
            "Campaign goals (--goal)",
            CampaignGoal::ALL
                .iter()
                .map(|goal| (goal.as_str(), goal.label()))
                .collect(),
        ),
        (
            "Channels (--channel, repeatable)",
            Channel::ALL
                .iter()
                .map(|channel| (channel.as_str(), channel.label()))
                .collect(),
        ),
        (
            "Tones (--tone)",
            Tone::ALL
                .iter()
                .map(|tone| (tone.as_str(), tone.label()))
                .collect(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_cover_every_option() {
        let tables = option_tables();
        assert_eq!(tables.len(), 3);
        assert_eq!(tables[0].1.len(), CampaignGoal::ALL.len());
        assert_eq!(tables[1].1.len(), Channel::ALL.len());
        assert_eq!(tables[2].1.len(), Tone::ALL.len());
        assert!(tables[1].1.contains(&("twitter-x", "Twitter/X")));
    }
}

// URL builders for the two backend routes and the Data Dragon catalog.

use crate::assets;

pub fn summoner_url(api_base: &str, name: &str, tag: &str, region: &str) -> String {
    format!(
        "{}/summoner?name={}&tag={}&region={}",
        api_base,
        urlencoding::encode(name),
        urlencoding::encode(tag),
        region
    )
}

pub fn live_game_url(api_base: &str, puuid: &str, region: &str) -> String {
    format!(
        "{}/livegame?puuid={}&region={}",
        api_base,
        urlencoding::encode(puuid),
        region
    )
}

pub fn champion_data_url() -> String {
    format!(
        "https://ddragon.leagueoflegends.com/cdn/{}/data/en_US/champion.json",
        assets::DDRAGON_VERSION
    )
}

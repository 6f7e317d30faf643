use std::{env, time::Duration};

use rankscout::{
    error::LookupError,
    lookup::{LookupRequest, lookup_ranked_stats},
    riot::{ApiBase, Platform, RiotClient},
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, path_regex},
};

const KEY: &str = "RGAPI-TEST-KEY";

fn client(server: &MockServer) -> RiotClient {
    RiotClient::with_base(
        KEY.to_string(),
        ApiBase::Fixed(server.uri()),
        Duration::from_secs(5),
    )
    .unwrap()
}

async fn mount_account(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/riot/account/v1/accounts/by-riot-id/Faker/KR1"))
        .and(header("X-Riot-Token", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn solo_queue_player_gets_one_field() {
    let server = MockServer::start().await;
    mount_account(
        &server,
        json!({ "puuid": "puuid-faker", "gameName": "Faker", "tagLine": "KR1" }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/lol/summoner/v4/summoners/by-puuid/puuid-faker"))
        .and(header("X-Riot-Token", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "summoner-faker",
            "puuid": "puuid-faker",
            "profileIconId": 6,
            "summonerLevel": 800
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lol/league/v4/entries/by-summoner/summoner-faker"))
        .and(header("X-Riot-Token", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "leagueId": "league-1",
            "queueType": "RANKED_SOLO_5x5",
            "tier": "GOLD",
            "rank": "II",
            "summonerId": "summoner-faker",
            "leaguePoints": 40,
            "wins": 10,
            "losses": 5,
            "veteran": false,
            "inactive": false,
            "freshBlood": false,
            "hotStreak": true
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let request = LookupRequest::parse("na1 Faker#KR1", Platform::EUW1);
    let stats = lookup_ranked_stats(&client(&server), &request).await.unwrap();

    assert_eq!(stats.title, "Faker's Ranked Stats");
    assert_eq!(stats.fields.len(), 1);
    assert_eq!(stats.fields[0].heading, "Solo Queue");
    assert_eq!(
        stats.fields[0].body,
        "Gold II - 40 LP\nWinrate: 66.7% (10W / 5L)"
    );
}

#[tokio::test]
async fn account_without_puuid_skips_summoner_lookup() {
    let server = MockServer::start().await;
    mount_account(&server, json!({ "gameName": "Faker", "tagLine": "KR1" })).await;
    Mock::given(method("GET"))
        .and(path_regex("^/lol/summoner/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let request = LookupRequest::parse("na1 Faker#KR1", Platform::EUW1);
    let err = lookup_ranked_stats(&client(&server), &request)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LookupError::MalformedAccountPayload {
            riot_id: "Faker#KR1".into()
        }
    );
}

#[tokio::test]
async fn undecodable_account_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/riot/account/v1/accounts/by-riot-id/Faker/KR1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex("^/lol/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let request = LookupRequest::parse("na1 Faker#KR1", Platform::EUW1);
    let err = lookup_ranked_stats(&client(&server), &request)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LookupError::MalformedAccountPayload {
            riot_id: "Faker#KR1".into()
        }
    );
}

#[tokio::test]
async fn missing_account_reports_region() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let request = LookupRequest::parse("Faker#KR1", Platform::EUW1);
    let err = lookup_ranked_stats(&client(&server), &request)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Account lookup failed for Faker#KR1 @ euw1.");
}

#[tokio::test]
#[ignore = "API Key required"]
async fn live_lookup_does_not_error() {
    dotenvy::dotenv().ok();
    let key = env::var("RIOT_API_KEY").expect("RIOT_API_KEY not set");
    let client = RiotClient::with_base(key, ApiBase::Riot, Duration::from_secs(10)).unwrap();

    let request = LookupRequest::parse("euw1 Le Conservateur#3012", Platform::EUW1);
    match lookup_ranked_stats(&client, &request).await {
        Ok(stats) => assert!(!stats.fields.is_empty()),
        Err(err) => assert!(
            !matches!(err, LookupError::UpstreamUnavailable { .. }),
            "unexpected upstream failure: {err:?}"
        ),
    }
}

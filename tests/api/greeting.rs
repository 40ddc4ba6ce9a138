use crate::helpers::{self_hrefs, spawn_app};
use reqwest::header::{CONTENT_TYPE, LOCATION};

#[actix_rt::test]
async fn v1_returns_a_201_with_the_default_greeting() {
    let test_app = spawn_app().await;

    let response = test_app.get_default_greeting().await;

    assert_eq!(201, response.status().as_u16());
    assert_eq!(
        response.headers()[CONTENT_TYPE].to_str().unwrap(),
        "application/hal+json"
    );
    let location = response.headers()[LOCATION].to_str().unwrap().to_owned();

    let body: serde_json::Value = response.json().await.expect("body is not json");
    assert_eq!(body["id"], 1);
    assert_eq!(body["content"], "HELLO WORLD");
    let hrefs = self_hrefs(&body);
    assert_eq!(
        hrefs,
        vec![
            format!("http://127.0.0.1:{}/?name=WORLD", test_app.port),
            format!("http://127.0.0.1:{}/v1", test_app.port),
        ]
    );
    //Location always points at the first self link
    assert_eq!(location, hrefs[0]);
}

#[actix_rt::test]
async fn named_greeting_takes_the_next_id_and_links_back_to_the_name() {
    let test_app = spawn_app().await;

    test_app.get_default_greeting().await;
    let response = test_app.get_greeting("?name=ALICE").await;

    assert_eq!(201, response.status().as_u16());
    let location = response.headers()[LOCATION].to_str().unwrap().to_owned();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["id"], 2);
    assert_eq!(body["content"], "HELLO ALICE");
    assert_eq!(location, format!("{}/?name=ALICE", test_app.address));
    assert_eq!(
        self_hrefs(&body),
        vec![
            format!("{}/?name=ALICE", test_app.address),
            format!("{}/v1", test_app.address),
        ]
    );
}

#[actix_rt::test]
async fn root_without_a_name_greets_the_world() {
    let test_app = spawn_app().await;

    let response = test_app.get_greeting("").await;

    assert_eq!(201, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["content"], "HELLO WORLD");
    assert_eq!(body["id"], 1);
}

#[actix_rt::test]
async fn odd_query_strings_fall_back_to_the_default_name() {
    let test_app = spawn_app().await;
    let test_cases = vec![
        ("?greeting=hi", "unknown parameter"),
        ("?NAME=ALICE", "differently cased parameter"),
    ];

    for (query, description) in test_cases {
        let response = test_app.get_greeting(query).await;

        assert_eq!(
            201,
            response.status().as_u16(),
            "The API did not return a 201 when the query was a {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body["content"], "HELLO WORLD",
            "The API did not greet the world when the query was a {}.",
            description
        );
    }
}

#[actix_rt::test]
async fn names_are_passed_through_verbatim() {
    let test_app = spawn_app().await;
    let test_cases = vec![
        ("?name=", "HELLO ", "/?name="),
        ("?name=mary%20ann", "HELLO mary ann", "/?name=mary%20ann"),
        ("?name=a%26b", "HELLO a&b", "/?name=a%26b"),
    ];

    for (query, content, link) in test_cases {
        let response = test_app.get_greeting(query).await;
        assert_eq!(201, response.status().as_u16());

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["content"], content);
        assert_eq!(self_hrefs(&body)[0], format!("{}{}", test_app.address, link));
    }
}

#[actix_rt::test]
async fn repeated_names_are_greeted_together() {
    let test_app = spawn_app().await;

    let response = test_app.get_greeting("?name=ALICE&name=BOB").await;

    assert_eq!(201, response.status().as_u16());
    let location = response.headers()[LOCATION].to_str().unwrap().to_owned();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["content"], "HELLO ALICE,BOB");
    assert_eq!(location, format!("{}/?name=ALICE%2CBOB", test_app.address));
}

#[actix_rt::test]
async fn concurrent_requests_get_distinct_ids() {
    let test_app = spawn_app().await;

    let requests: Vec<_> = (0..20)
        .map(|i| {
            let url = format!("{}/?name=N{}", test_app.address, i);
            tokio::spawn(async move {
                let response = reqwest::get(&url).await.expect("request failed");
                let body: serde_json::Value = response.json().await.unwrap();
                body["id"].as_i64().unwrap()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for request in requests {
        ids.push(request.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<i64>>());
}

//! Server-level list/call/read entry points.

use genshin_guide_mcp_server::{Config, McpServer};
use rmcp::ServerHandler;
use serde_json::{Value, json};

fn server() -> McpServer {
    McpServer::new(Config::default()).unwrap()
}

#[test]
fn info_advertises_name_version_and_capabilities() {
    let mut config = Config::default();
    config.server.name = "teyvat".to_string();
    let server = McpServer::new(config).unwrap();

    let info = server.get_info();
    assert_eq!(info.server_info.name, "teyvat");
    assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.resources.is_some());
    assert!(info.capabilities.prompts.is_none());
}

#[test]
fn listed_tools_carry_input_schemas() {
    for tool in server().list_tools() {
        assert!(tool["description"].is_string());
        assert_eq!(tool["inputSchema"]["type"], "object");
        assert!(tool["inputSchema"]["properties"]["character_name"].is_object());
    }
}

#[tokio::test]
async fn concurrent_calls_share_one_store() {
    let server = server();
    let names = ["Mavuika", "Neuvillette", "Kazuha", "Bennett", "Zhongli"];

    let handles: Vec<_> = names
        .iter()
        .map(|name| {
            let server = server.clone();
            let name = name.to_string();
            tokio::spawn(async move {
                server
                    .call_tool("get_character_info", json!({ "character_name": name }))
                    .unwrap()
            })
        })
        .collect();

    for (handle, name) in handles.into_iter().zip(names) {
        let result = handle.await.unwrap();
        assert_eq!(result["isError"], false);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with(&format!("**{}**", name)));
    }
}

#[test]
fn errors_are_returned_in_band() {
    let server = server();

    let unknown = server
        .call_tool("nonexistent_tool", json!({ "character_name": "Kazuha" }))
        .unwrap();
    assert_eq!(unknown["isError"], true);
    assert_eq!(unknown["content"][0]["text"], "Unknown tool: nonexistent_tool");

    let missing = server.call_tool("get_character_info", Value::Null).unwrap();
    assert_eq!(missing["isError"], true);
    assert!(
        missing["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("character_name")
    );
}

#[test]
fn resources_are_listed_in_order_and_readable() {
    let server = server();
    let uris: Vec<String> = server
        .list_resources()
        .iter()
        .map(|r| r["uri"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        uris,
        ["genshin://characters", "genshin://builds", "genshin://teams"]
    );

    let read = server.read_resource("genshin://characters").unwrap();
    let text = read["contents"][0]["text"].as_str().unwrap();
    let characters: Value = serde_json::from_str(text).unwrap();
    assert_eq!(characters["mavuika"]["element"], "Pyro");

    let err = server.read_resource("genshin://artifacts").unwrap_err();
    assert!(err.contains("genshin://artifacts"));
}

//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting graph and server fixtures
//! across tests.

use serde_json::{Value, json};

use crate::client::{ClusterClient, HttpConfig};
use crate::domain::{ClusterGraph, ExchangeEntry, GraphData};
use crate::state::platform::clipboard::ClipboardManager;
use crate::state::{App, AppConfig, StartupOptions};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

/// Cluster graph fixtures.
pub struct GraphMother;

impl GraphMother {
    /// Leaf that sent 1.5 Ether to the exchange.
    pub const ADDR_A: &'static str = "0xAAA0000000000000000000000000000000000001";
    /// Deposit that forwarded 2.25 Ether to the exchange.
    pub const ADDR_B: &'static str = "0xBBB0000000000000000000000000000000000002";
    /// The exchange both addresses sent to.
    pub const ADDR_C: &'static str = "0xCCC0000000000000000000000000000000000003";

    /// `{nodes, edges}` JSON of a three node cluster: A (leaf) and B
    /// (deposit) each sent one transaction to C (exchange).
    #[must_use]
    pub fn two_senders_json() -> Value {
        json!({
            "nodes": [
                { "id": Self::ADDR_A, "props": { "type": "leaf" } },
                { "id": Self::ADDR_B, "props": { "type": "deposit" } },
                { "id": Self::ADDR_C, "props": { "type": "exchange", "name": "Kraken" } }
            ],
            "edges": [
                {
                    "src": Self::ADDR_A,
                    "dst": Self::ADDR_C,
                    "props": { "amount": 1.5, "txs": ["0xtx_a"] }
                },
                {
                    "src": Self::ADDR_B,
                    "dst": Self::ADDR_C,
                    "props": { "amount": "2.25", "txs": [["0xtx_b", 1_600_000_000, 2.25]] }
                }
            ]
        })
    }

    #[must_use]
    pub fn two_senders_data() -> GraphData {
        serde_json::from_value(Self::two_senders_json()).expect("fixture graph should parse")
    }

    #[must_use]
    pub fn two_senders() -> ClusterGraph {
        ClusterGraph::from_data(Self::two_senders_data())
    }

    /// A cluster of `count` leaves that each sent 1 Ether to one exchange.
    #[must_use]
    pub fn leaves(count: usize) -> ClusterGraph {
        let exchange = "0xEEE0000000000000000000000000000000000000";
        let mut nodes = vec![json!({ "id": exchange, "props": { "type": "exchange" } })];
        let mut edges = Vec::with_capacity(count);
        for i in 0..count {
            let id = format!("0x{i:040x}");
            nodes.push(json!({ "id": id, "props": { "type": "leaf" } }));
            edges.push(json!({ "src": id, "dst": exchange, "props": { "amount": 1.0, "txs": [] } }));
        }
        let data: GraphData = serde_json::from_value(json!({ "nodes": nodes, "edges": edges }))
            .expect("generated graph should parse");
        ClusterGraph::from_data(data)
    }
}

/// Server payload fixtures.
pub struct ServerMother;

impl ServerMother {
    /// `/search` body wrapping the two-sender cluster, client up.
    #[must_use]
    pub fn search_response() -> Value {
        json!({
            "resultsGraph": GraphMother::two_senders_json(),
            "clientData": { "maxBlock": 17_000_000, "syncTime": "2023-05-01, 10:00" },
            "exchLen": 40,
            "addrsCount": { "exchanges": 40, "deposits": 120, "leafs": 900 }
        })
    }

    /// `/refreshDB` body with the blockchain client reported down.
    #[must_use]
    pub fn refresh_client_down() -> Value {
        json!({
            "clientData": null,
            "exchLen": 41,
            "addrsCount": { "exchanges": 41, "deposits": 125 }
        })
    }

    #[must_use]
    pub fn exchange_list() -> Value {
        json!({
            "0xEX00000000000000000000000000000000000001": "Binance",
            "0xEX00000000000000000000000000000000000002": "Kraken"
        })
    }

    #[must_use]
    pub fn exchange_entries() -> Vec<ExchangeEntry> {
        crate::domain::exchange::parse_exchange_list(Self::exchange_list())
            .expect("fixture list should parse")
    }

    #[must_use]
    pub fn result(result: &str) -> Value {
        json!({ "result": result })
    }
}

/// App fixtures for render tests. Nothing is fetched: the client points at
/// a closed port and no task is spawned until a command asks for one.
pub struct AppMother;

impl AppMother {
    #[must_use]
    pub fn empty() -> App {
        let client = ClusterClient::new("http://127.0.0.1:9", HttpConfig::default())
            .expect("test client should build");
        let mut app = App::with_client(client, AppConfig::default(), StartupOptions::default());
        app.clipboard = ClipboardManager::in_memory();
        app
    }

    /// App with the two-sender cluster loaded.
    #[must_use]
    pub fn loaded() -> App {
        let mut app = Self::empty();
        app.data.load_graph(GraphMother::two_senders());
        app
    }
}

/// Flattens a test backend buffer into newline-separated rows.
#[must_use]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

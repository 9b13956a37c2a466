
use crate::api::params::Parameter;
use crate::api::registry::MethodBlock;
use crate::api::request::HttpMethod;
use crate::api::types::ServersByGame;
use crate::api::BlockKind;
use crate::error::Result;

method_block!(
    /// Server online counters (`wgn/servers/info`)
    Servers,
    BlockKind::Servers
);

impl Servers {
    /// Online players per server, keyed by game prefix. `games` narrows the
    /// result to e.g. `["wot", "wows"]`; empty means every game.
    pub async fn info(&self, games: &[&str]) -> Result<ServersByGame> {
        let params: Vec<Parameter> = if games.is_empty() {
            Vec::new()
        } else {
            vec![Parameter::new("game", games)]
        };
        self.context
            .invoke(Self::KIND, "info", HttpMethod::Get, params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::blocks::test_context;

    #[tokio::test]
    async fn test_servers_info() {
        let (transport, context) = test_context(
            r#"{"status":"ok","data":{"wot":[{"players_online":1200,"server":"EU1"},{"players_online":800,"server":"EU2"}]}}"#,
        );
        let servers = Servers::new(context);

        let info = servers.info(&["wot"]).await.unwrap();
        assert_eq!(info["wot"].len(), 2);
        assert_eq!(info["wot"][0].players_online, 1200);

        let request = transport.last_request().unwrap();
        assert_eq!(request.url.path(), "/wgn/servers/info/");
        assert_eq!(request.url.query(), Some("application_id=demo&game=wot"));
    }

    #[tokio::test]
    async fn test_untyped_call() {
        let (transport, context) =
            test_context(r#"{"status":"ok","data":{"wows":[{"players_online":5,"server":"EU"}]}}"#);
        let servers = Servers::new(context);

        let data: serde_json::Value = servers
            .call("info", HttpMethod::Post, [("game", "wows")])
            .await
            .unwrap();
        assert_eq!(data["wows"][0]["server"], "EU");

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body.as_deref(), Some("application_id=demo&game=wows"));
    }
}

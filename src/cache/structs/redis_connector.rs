/// Opens RESP3 multiplexed sessions against a Redis server.
#[derive(Debug, Clone)]
pub struct RedisConnector {
    pub(crate) client: redis::Client,
}

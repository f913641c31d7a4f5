/*
    Session layer over the wallet service API.

    The client never talks HTTP itself. Every call is serialized, signed
    with the copayer's request key and handed to a `Transport`, so callers
    can plug in any HTTP stack or a mock.
*/

use std::fmt;

use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Serialize
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    auth::{self, Headers, RequestAuthenticator},
    config::{Config, Network},
    error::{Error, Result},
    hdwallet::Credentials,
    models::{
        Address, AddressScan, AddressesQuery, Balance, BalanceQuery, BroadcastRawTxRequest,
        CreateAddressRequest, CreateTxProposalRequest, CreateWalletRequest, EmptyRequest,
        FeeLevel, FeeLevelsQuery, FiatRate, FiatRateQuery, JoinWalletRequest, MaxInfo,
        MaxInfoQuery, Notification, NotificationsQuery, Preferences, PublishTxProposalRequest,
        PushSubscriptionRequest, RejectTxProposalRequest, SavePreferencesRequest,
        SignTxProposalRequest, StartScanRequest, StatusQuery, Transaction, TxHistoryQuery,
        TxInput, TxOutput, TxProposal, UtxosQuery, Version, WalletCreate, WalletJoin,
        WalletStatus
    },
    secret,
    util::encode_02x
};

const DEFAULT_FEE_LEVEL: &str = "normal";
const DEFAULT_RATE_PROVIDER: &str = "BitPay";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE"
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures reported by a transport
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("API error, status: {status}, code: {code}, message: {message}")]
    Api { status: u16, code: String, message: String },

    #[error("request failed: {0}")]
    Request(String)
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e.to_string())
    }
}

/**
    Sends one request to the wallet service.

    `url` is absolute. `body` is `None` for GET requests, whose signed
    body is never sent. The transport owns timeouts and status handling.
*/
pub trait Transport {
    fn send(
        &self,
        method: Method,
        url: &str,
        headers: &Headers,
        body: Option<&[u8]>
    ) -> std::result::Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(
        &self,
        method: Method,
        url: &str,
        headers: &Headers,
        body: Option<&[u8]>
    ) -> std::result::Result<Vec<u8>, TransportError> {
        (**self).send(method, url, headers, body)
    }
}

/**
    Appends a query record to `path`. Keys come out sorted, `None`
    fields are left out and the rest are rendered as plain strings.
*/
fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String> {
    let params = match serde_json::to_value(query)? {
        Value::Object(params) => params,
        other => return Err(Error::Serialization(format!("query must be a record, found {}", other)))
    };

    let mut encoder = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            other => other.to_string()
        };
        encoder.append_pair(&key, &value);
    }

    let query = encoder.finish();
    if query.is_empty() {
        return Ok(path.to_string())
    }
    Ok(format!("{}?{}", path, query))
}

pub struct Client<T: Transport> {
    config: Config,
    credentials: Credentials,
    auth: RequestAuthenticator,
    transport: T
}

impl<T: Transport> Client<T> {
    pub fn new(config: Config, credentials: Credentials, transport: T) -> Self {
        let auth = RequestAuthenticator::new(&credentials, config.coin);
        debug!(base_url = %config.base_url, coin = %config.coin, network = %config.network, "wallet client ready");

        Self {
            config,
            credentials,
            auth,
            transport
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Serializes, signs and sends a request, then decodes the response
    fn request<B, R>(&self, method: Method, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned
    {
        let body = serde_json::to_string(body)?;
        let headers = self.auth.stamp(method.as_str(), path, &body);
        let url = self.config.absolute_url(path);

        let payload = match method {
            Method::Get => None,
            _ => Some(body.as_bytes())
        };

        let response = self.transport
            .send(method, &url, &headers, payload)
            .map_err(|e| {
                warn!(%method, %url, error = %e, "wallet service request failed");
                Error::from(e)
            })?;

        Ok(serde_json::from_slice(&response)?)
    }

    /// GET with the query signed as part of the path
    fn get<Q, R>(&self, path: &str, query: &Q) -> Result<R>
    where
        Q: Serialize,
        R: DeserializeOwned
    {
        self.request(Method::Get, &with_query(path, query)?, &EmptyRequest {})
    }

    pub fn get_version(&self) -> Result<Version> {
        self.get("/v1/version/", &EmptyRequest {})
    }

    /**
        Creates a new m-of-n wallet and builds the invitation secret
        the other copayers join with.
    */
    pub fn create_wallet(&self, name: &str, m: usize, n: usize, single_address: bool) -> Result<WalletCreate> {
        let body = CreateWalletRequest {
            name: name.to_string(),
            m,
            n,
            pub_key: self.credentials.root_pub_key().hex(),
            coin: self.config.coin,
            network: self.config.network,
            single_address
        };

        let mut response: WalletCreate = self.request(Method::Post, "/v2/wallets", &body)?;
        response.secret = secret::build_secret(
            &self.credentials.root_prv_key(),
            &response.wallet_id,
            self.config.coin,
            self.config.network
        )?;

        debug!(wallet_id = %response.wallet_id, m, n, "created wallet");
        Ok(response)
    }

    /**
        Joins the wallet an invitation secret points to.
    */
    pub fn join_wallet(&self, name: &str, secret: &str) -> Result<WalletJoin> {
        let invitation = secret::parse_secret(secret)?;
        let signature = auth::copayer_signature(name, &self.credentials, &invitation.private_key);

        let body = JoinWalletRequest {
            name: name.to_string(),
            coin: invitation.coin,
            xpub_key: self.credentials.account_xpub_string(),
            request_pub_key: self.credentials.request_pub_key().hex(),
            copayer_signature: encode_02x(&signature)
        };

        let path = format!("/v2/wallets/{}/copayers", invitation.wallet_id.hyphenated());
        let response: WalletJoin = self.request(Method::Post, &path, &body)?;

        debug!(wallet_id = %invitation.wallet_id, copayer_id = %response.copayer_id, "joined wallet");
        Ok(response)
    }

    pub fn get_status(&self, include_extended_info: bool, two_step: bool) -> Result<WalletStatus> {
        self.get("/v2/wallets/", &StatusQuery { include_extended_info, two_step })
    }

    pub fn get_balance(&self, two_step: bool) -> Result<Balance> {
        self.get("/v1/balance/", &BalanceQuery { two_step })
    }

    /// Fee levels of the configured coin and network
    pub fn get_fee_levels(&self) -> Result<Vec<FeeLevel>> {
        let query = FeeLevelsQuery {
            coin: self.config.coin,
            network: self.config.network
        };

        self.get("/v2/feelevels/", &query)
    }

    /// Derives the next receiving address on the service
    pub fn create_address(&self, ignore_max_gap: bool) -> Result<Address> {
        let address: Address = self.request(Method::Post, "/v3/addresses/", &CreateAddressRequest { ignore_max_gap })?;
        debug!(address = %address.address, path = %address.path, "created address");
        Ok(address)
    }

    pub fn get_main_addresses(&self, limit: usize, reverse: bool) -> Result<Vec<Address>> {
        self.get("/v1/addresses/", &AddressesQuery { limit, reverse })
    }

    pub fn start_scan(&self, include_copayer_branches: bool) -> Result<AddressScan> {
        self.request(Method::Post, "/v1/addresses/scan", &StartScanRequest { include_copayer_branches })
    }

    /// Unspent outputs of the given addresses, or of the whole wallet when empty
    pub fn get_utxos(&self, addresses: &[&str]) -> Result<Vec<TxInput>> {
        let query = UtxosQuery {
            addresses: if addresses.is_empty() { None } else { Some(addresses.join(",")) }
        };

        self.get("/v1/utxos/", &query)
    }

    pub fn get_tx_history(&self, skip: u64, limit: u64, include_extended_info: bool) -> Result<Vec<Transaction>> {
        self.get("/v1/txhistory/", &TxHistoryQuery { skip, limit, include_extended_info })
    }

    /// What sending the whole balance would cost
    pub fn get_max_info(&self, fee_level: Option<&str>, fee_per_kb: Option<u64>) -> Result<MaxInfo> {
        let query = MaxInfoQuery {
            fee_level: fee_level.map(|l| l.to_string()),
            fee_per_kb
        };

        self.get("/v1/sendmaxinfo/", &query)
    }

    /// Exchange rate of `code` at unix time `ts`. The provider defaults to BitPay.
    pub fn get_fiat_rate(&self, code: &str, provider: Option<&str>, ts: i64) -> Result<FiatRate> {
        let query = FiatRateQuery {
            provider: provider.unwrap_or(DEFAULT_RATE_PROVIDER).to_string(),
            ts
        };

        self.get(&format!("/v1/fiatrates/{}/", code), &query)
    }

    pub fn get_notifications(&self, last_id: Option<&str>, time_span: Option<u64>, include_own: bool) -> Result<Vec<Notification>> {
        let query = NotificationsQuery {
            include_own,
            notification_id: last_id.map(|id| id.to_string()),
            time_span
        };

        self.get("/v1/notifications/", &query)
    }

    pub fn get_preferences(&self) -> Result<Preferences> {
        self.get("/v1/preferences/", &EmptyRequest {})
    }

    pub fn save_preferences(&self, preferences: &SavePreferencesRequest) -> Result<()> {
        let _: IgnoredAny = self.request(Method::Put, "/v1/preferences/", preferences)?;
        Ok(())
    }

    pub fn push_notifications_subscribe(&self, platform: &str, token: &str) -> Result<()> {
        let body = PushSubscriptionRequest {
            platform: platform.to_string(),
            token: token.to_string()
        };

        let _: IgnoredAny = self.request(Method::Post, "/v1/pushnotifications/subscriptions/", &body)?;
        Ok(())
    }

    pub fn push_notifications_unsubscribe(&self, token: &str) -> Result<()> {
        let path = format!("/v2/pushnotifications/subscriptions/{}", token);
        let _: IgnoredAny = self.request(Method::Delete, &path, &EmptyRequest {})?;
        Ok(())
    }

    /// Asks the service to build a proposal. The fee level defaults to "normal".
    pub fn create_tx_proposal(&self, outputs: Vec<TxOutput>, fee_level: Option<&str>, dry_run: bool) -> Result<TxProposal> {
        let body = CreateTxProposalRequest {
            outputs,
            fee_level: fee_level.unwrap_or(DEFAULT_FEE_LEVEL).to_string(),
            dry_run
        };

        self.request(Method::Post, "/v2/txproposals/", &body)
    }

    pub fn get_tx_proposal(&self, id: &str) -> Result<TxProposal> {
        self.request(Method::Get, &format!("/v1/txproposals/{}", id), &EmptyRequest {})
    }

    /// Pending proposals of the wallet
    pub fn get_tx_proposals(&self) -> Result<Vec<TxProposal>> {
        self.request(Method::Get, "/v1/txproposals/", &EmptyRequest {})
    }

    /**
        Publishes a proposal created by this copayer, signing the
        transaction it describes with the request key.
    */
    pub fn publish_tx_proposal(&self, txp: &TxProposal) -> Result<TxProposal> {
        let signature = txp.proposal_signature(&self.credentials.request_prv_key(), self.config.network)?;
        let body = PublishTxProposalRequest {
            proposal_signature: encode_02x(&signature)
        };

        self.request(Method::Post, &format!("/v1/txproposals/{}/publish/", txp.id), &body)
    }

    /**
        Signs every input of a proposal and sends the signatures.
    */
    pub fn sign_tx_proposal(&self, txp: &TxProposal) -> Result<TxProposal> {
        let body = SignTxProposalRequest {
            signatures: txp.sign_inputs(&self.credentials)?.iter().map(|s| encode_02x(s)).collect()
        };

        self.request(Method::Post, &format!("/v1/txproposals/{}/signatures/", txp.id), &body)
    }

    pub fn reject_tx_proposal(&self, id: &str, reason: &str) -> Result<TxProposal> {
        let body = RejectTxProposalRequest {
            reason: reason.to_string()
        };

        self.request(Method::Post, &format!("/v1/txproposals/{}/rejections/", id), &body)
    }

    pub fn broadcast_tx_proposal(&self, id: &str) -> Result<TxProposal> {
        self.request(Method::Post, &format!("/v1/txproposals/{}/broadcast/", id), &EmptyRequest {})
    }

    pub fn remove_tx_proposal(&self, id: &str) -> Result<TxProposal> {
        self.request(Method::Delete, &format!("/v1/txproposals/{}", id), &EmptyRequest {})
    }

    /**
        Broadcasts a fully signed transaction given as hex and returns its
        txid. The configured network is used when none is given.
    */
    pub fn broadcast_raw_tx(&self, raw_tx: &str, network: Option<Network>) -> Result<String> {
        let body = BroadcastRawTxRequest {
            raw_tx: raw_tx.to_string(),
            network: network.unwrap_or(self.config.network)
        };

        let txid: String = self.request(Method::Post, "/v1/broadcast_raw/", &body)?;
        debug!(%txid, "broadcast raw transaction");
        Ok(txid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::{auth::{verify_message, HEADER_SIGNATURE}, error::ErrorKind};

    /// Replies with a canned body and remembers what it was sent
    struct Canned {
        reply: std::result::Result<Vec<u8>, String>,
        sent: RefCell<Vec<(Method, String, Headers, Option<Vec<u8>>)>>
    }

    impl Canned {
        fn ok(reply: &str) -> Self {
            Self { reply: Ok(reply.as_bytes().to_vec()), sent: RefCell::new(vec![]) }
        }
    }

    impl Transport for Canned {
        fn send(&self, method: Method, url: &str, headers: &Headers, body: Option<&[u8]>) -> std::result::Result<Vec<u8>, TransportError> {
            self.sent.borrow_mut().push((method, url.to_string(), headers.clone(), body.map(|b| b.to_vec())));
            self.reply.clone().map_err(TransportError::Request)
        }
    }

    fn credentials() -> Credentials {
        Credentials::from_mnemonic(
            &Config::local_testnet(),
            "cause panel agent rare face frog dune congress thought assault urban impose"
        ).unwrap()
    }

    #[test]
    fn get_is_signed_over_empty_body() {
        let transport = Canned::ok("[]");
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        assert!(client.get_tx_proposals().unwrap().is_empty());

        let sent = transport.sent.borrow();
        let (method, url, headers, body) = &sent[0];
        assert_eq!(*method, Method::Get);
        assert_eq!(url, "http://localhost:3232/bws/api/v1/txproposals/");
        assert!(body.is_none());

        let sig = hex::decode(&headers[HEADER_SIGNATURE]).unwrap();
        let message = auth::request_message("GET", "/v1/txproposals/", "{}");
        assert!(verify_message(message.as_bytes(), &sig, &credentials().request_pub_key()).unwrap());
    }

    #[test]
    fn create_wallet_builds_secret() {
        let transport = Canned::ok(r#"{"walletId": "42037ba2-3d32-4b19-af2b-f8be6d3fe3bd"}"#);
        let client = Client::new(Config::local_testnet(), credentials(), &transport);

        let created = client.create_wallet("shared", 2, 3, false).unwrap();
        let invitation = secret::parse_secret(&created.secret).unwrap();
        assert_eq!(invitation.private_key, credentials().root_prv_key());
        assert_eq!(invitation.wallet_id.hyphenated().to_string(), "42037ba2-3d32-4b19-af2b-f8be6d3fe3bd");

        let sent = transport.sent.borrow();
        let body: serde_json::Value = serde_json::from_slice(sent[0].3.as_ref().unwrap()).unwrap();
        assert_eq!(body["pubKey"], credentials().root_pub_key().hex());
        assert_eq!(body["network"], "testnet");
        assert_eq!(body["m"], 2);
    }

    #[test]
    fn transport_failures_surface() {
        let transport = Canned {
            reply: Err("connection refused".to_string()),
            sent: RefCell::new(vec![])
        };
        let client = Client::new(Config::local_testnet(), credentials(), &transport);

        let err = client.broadcast_tx_proposal("p1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn bad_response_body() {
        let transport = Canned::ok("not json");
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        assert!(matches!(client.remove_tx_proposal("p1"), Err(Error::Json(_))));
        assert_eq!(transport.sent.borrow()[0].0, Method::Delete);
    }

    const BASE: &str = "http://localhost:3232/bws/api";

    /// Url, method and decoded body of the single request sent
    fn only_request(transport: &Canned) -> (Method, String, Option<serde_json::Value>) {
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        let (method, url, _, body) = &sent[0];
        let body = body.as_ref().map(|b| serde_json::from_slice(b).unwrap());
        (*method, url.clone(), body)
    }

    #[test]
    fn queries_are_sorted_and_signed() {
        let transport = Canned::ok(r#"{"balance": {"totalAmount": 5}}"#);
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        assert_eq!(client.get_status(false, true).unwrap().balance.total_amount, 5);

        let sent = transport.sent.borrow();
        let (method, url, headers, body) = &sent[0];
        assert_eq!(*method, Method::Get);
        assert_eq!(url, &format!("{}/v2/wallets/?includeExtendedInfo=false&twoStep=true", BASE));
        assert!(body.is_none());

        let sig = hex::decode(&headers[HEADER_SIGNATURE]).unwrap();
        let message = auth::request_message("GET", "/v2/wallets/?includeExtendedInfo=false&twoStep=true", "{}");
        assert!(verify_message(message.as_bytes(), &sig, &credentials().request_pub_key()).unwrap());
    }

    #[test]
    fn balance_and_fee_levels() {
        let transport = Canned::ok(r#"{"availableAmount": 14110412}"#);
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        assert_eq!(client.get_balance(false).unwrap().available_amount, 14110412);
        assert_eq!(only_request(&transport).1, format!("{}/v1/balance/?twoStep=false", BASE));

        let transport = Canned::ok(r#"[{"level": "normal", "feePerKb": 10000, "nbBlocks": 3}]"#);
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        let levels = client.get_fee_levels().unwrap();
        assert_eq!(levels[0].fee_per_kb, 10000);
        assert_eq!(only_request(&transport).1, format!("{}/v2/feelevels/?coin=btc&network=testnet", BASE));
    }

    #[test]
    fn addresses() {
        let transport = Canned::ok(r#"{"address": "mj4exG7YrSTxvpvXyFapoVRjNn9hMvYG1C", "path": "m/0/3"}"#);
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        let address = client.create_address(true).unwrap();
        assert_eq!(address.path, "m/0/3");

        let (method, url, body) = only_request(&transport);
        assert_eq!(method, Method::Post);
        assert_eq!(url, format!("{}/v3/addresses/", BASE));
        assert_eq!(body.unwrap()["ignoreMaxGap"], true);

        let transport = Canned::ok(r#"[{"address": "a1"}, {"address": "a2"}]"#);
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        assert_eq!(client.get_main_addresses(2, true).unwrap().len(), 2);
        assert_eq!(only_request(&transport).1, format!("{}/v1/addresses/?limit=2&reverse=true", BASE));
    }

    #[test]
    fn utxos() {
        let transport = Canned::ok("[]");
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        assert!(client.get_utxos(&[]).unwrap().is_empty());
        assert_eq!(only_request(&transport).1, format!("{}/v1/utxos/", BASE));

        let transport = Canned::ok(r#"[{"txid": "aa", "vout": 1, "satoshis": 1000}]"#);
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        let utxos = client.get_utxos(&["m1", "m2"]).unwrap();
        assert_eq!(utxos[0].satoshis, 1000);
        assert_eq!(only_request(&transport).1, format!("{}/v1/utxos/?addresses=m1%2Cm2", BASE));
    }

    #[test]
    fn history_and_max_info() {
        let transport = Canned::ok(r#"[{"txid": "aa", "action": "received", "amount": 10}]"#);
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        let history = client.get_tx_history(0, 10, false).unwrap();
        assert_eq!(history[0].action, "received");
        assert_eq!(
            only_request(&transport).1,
            format!("{}/v1/txhistory/?includeExtendedInfo=false&limit=10&skip=0", BASE)
        );

        //Unset options stay out of the query
        let transport = Canned::ok(r#"{"amount": 14110166, "fee": 246}"#);
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        assert_eq!(client.get_max_info(None, None).unwrap().fee, 246);
        assert_eq!(only_request(&transport).1, format!("{}/v1/sendmaxinfo/", BASE));

        let transport = Canned::ok("{}");
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        client.get_max_info(Some("priority"), None).unwrap();
        assert_eq!(only_request(&transport).1, format!("{}/v1/sendmaxinfo/?feeLevel=priority", BASE));
    }

    #[test]
    fn broadcast_raw() {
        let transport = Canned::ok(r#""0d5e1687d8f3dc24532798f25dcd9719d7148766b4516ac81e8e33bda54979b4""#);
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        let txid = client.broadcast_raw_tx("0100", None).unwrap();
        assert_eq!(txid, "0d5e1687d8f3dc24532798f25dcd9719d7148766b4516ac81e8e33bda54979b4");

        let (method, url, body) = only_request(&transport);
        let body = body.unwrap();
        assert_eq!(method, Method::Post);
        assert_eq!(url, format!("{}/v1/broadcast_raw/", BASE));
        assert_eq!(body["rawTx"], "0100");
        assert_eq!(body["network"], "testnet");
    }

    #[test]
    fn preferences_and_push() {
        let transport = Canned::ok("{}");
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        let preferences = SavePreferencesRequest {
            language: Some("en".to_string()),
            ..Default::default()
        };
        client.save_preferences(&preferences).unwrap();

        let (method, url, body) = only_request(&transport);
        assert_eq!(method, Method::Put);
        assert_eq!(url, format!("{}/v1/preferences/", BASE));
        assert_eq!(body.unwrap(), serde_json::json!({"language": "en"}));

        let transport = Canned::ok("{}");
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        client.push_notifications_unsubscribe("t0k").unwrap();
        let (method, url, _) = only_request(&transport);
        assert_eq!(method, Method::Delete);
        assert_eq!(url, format!("{}/v2/pushnotifications/subscriptions/t0k", BASE));
    }

    #[test]
    fn notifications_and_rates() {
        let transport = Canned::ok(r#"[{"id": "n1", "type": "NewTxProposal", "data": {"txProposalId": "p1"}}]"#);
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        let notifications = client.get_notifications(Some("n0"), None, true).unwrap();
        assert_eq!(notifications[0].data["txProposalId"], "p1");
        assert_eq!(
            only_request(&transport).1,
            format!("{}/v1/notifications/?includeOwn=true&notificationId=n0", BASE)
        );

        let transport = Canned::ok(r#"{"ts": 1600000000000, "rate": 10650.5}"#);
        let client = Client::new(Config::local_testnet(), credentials(), &transport);
        assert_eq!(client.get_fiat_rate("USD", None, 1600000000).unwrap().rate, 10650.5);
        assert_eq!(
            only_request(&transport).1,
            format!("{}/v1/fiatrates/USD/?provider=BitPay&ts=1600000000", BASE)
        );
    }
}

use std::sync::Mutex;

use bws_keys::{
    auth::{request_message, verify_message, HEADER_IDENTITY, HEADER_SIGNATURE},
    prelude::*,
    util::encode_02x
};

const MNEMONIC: &str = "cause panel agent rare face frog dune congress thought assault urban impose";

const PROPOSAL: &str = r#"{
    "id": "txp-1",
    "walletM": 2,
    "walletN": 2,
    "amount": 1958820,
    "fee": 246,
    "outputOrder": [0, 1],
    "status": "pending",
    "changeAddress": {"address": "mykbw8QcyMq9MeonF8626ayQYq4DVtiisK"},
    "inputs": [{
        "txid": "0d5e1687d8f3dc24532798f25dcd9719d7148766b4516ac81e8e33bda54979b4",
        "vout": 1,
        "satoshis": 14110412,
        "scriptPubKey": "76a9143874e8eb8a2e018c46721fcdd8e9049f619af35488ac",
        "path": "m/1/4",
        "publicKeys": [
            "037cd8c7f67d1f6a7eadd2a61ce187e770385cdbc8935db644fd8050bd0ea81d05",
            "02a3957ab731ef0e17d856f73e69eb503b32266357e458e4cd2ff27902b2967efe"
        ]
    }],
    "outputs": [{"amount": 1958820, "toAddress": "mnv9rH2VfAUX9YZzFkoRysGFtggvz1wRnY"}]
}"#;

struct Sent {
    method: Method,
    url: String,
    headers: Headers,
    body: Option<Vec<u8>>
}

/// Records every request and answers with a fixed body
struct Recorder {
    reply: String,
    sent: Mutex<Vec<Sent>>
}

impl Recorder {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            sent: Mutex::new(vec![])
        }
    }

    fn last_body(&self) -> serde_json::Value {
        let sent = self.sent.lock().unwrap();
        serde_json::from_slice(sent.last().unwrap().body.as_ref().unwrap()).unwrap()
    }
}

impl Transport for Recorder {
    fn send(&self, method: Method, url: &str, headers: &Headers, body: Option<&[u8]>) -> std::result::Result<Vec<u8>, TransportError> {
        self.sent.lock().unwrap().push(Sent {
            method,
            url: url.to_string(),
            headers: headers.clone(),
            body: body.map(|b| b.to_vec())
        });
        Ok(self.reply.as_bytes().to_vec())
    }
}

fn credentials() -> Credentials {
    Credentials::from_mnemonic(&Config::local_testnet(), MNEMONIC).unwrap()
}

#[test]
fn sign_and_publish_proposal() {
    let transport = Recorder::new(PROPOSAL);
    let client = Client::new(Config::local_testnet(), credentials(), &transport);

    let txp = client.get_tx_proposal("txp-1").unwrap();
    assert_eq!(txp.wallet_m, 2);

    client.publish_tx_proposal(&txp).unwrap();
    let signature = hex::decode(transport.last_body()["proposalSignature"].as_str().unwrap()).unwrap();
    let raw = encode_02x(&txp.serialize(Network::Testnet).unwrap());
    assert!(verify_message(raw.as_bytes(), &signature, &credentials().request_pub_key()).unwrap());

    client.sign_tx_proposal(&txp).unwrap();
    let body = transport.last_body();
    let signatures = body["signatures"].as_array().unwrap();
    assert_eq!(signatures.len(), 1);

    let (key, _) = credentials().derive_from_account("m/1/4").unwrap();
    let expected = txp.input_signature(&key, Network::Testnet, 0).unwrap();
    assert_eq!(signatures[0], encode_02x(&expected));

    let sent = transport.sent.lock().unwrap();
    let urls: Vec<&str> = sent.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(urls, vec![
        "http://localhost:3232/bws/api/v1/txproposals/txp-1",
        "http://localhost:3232/bws/api/v1/txproposals/txp-1/publish/",
        "http://localhost:3232/bws/api/v1/txproposals/txp-1/signatures/"
    ]);
    assert_eq!(sent[0].method, Method::Get);
    assert!(sent[0].body.is_none());
    assert!(sent.iter().skip(1).all(|s| s.method == Method::Post));

    //Every request carries the same identity and a valid request signature
    let auth = RequestAuthenticator::new(&credentials(), Coin::Btc);
    for request in sent.iter().skip(1) {
        assert_eq!(request.headers[HEADER_IDENTITY], auth.identity());

        let path = request.url.trim_start_matches("http://localhost:3232/bws/api");
        let body = String::from_utf8(request.body.clone().unwrap()).unwrap();
        let message = request_message(request.method.as_str(), path, &body);
        let sig = hex::decode(&request.headers[HEADER_SIGNATURE]).unwrap();
        assert!(verify_message(message.as_bytes(), &sig, &credentials().request_pub_key()).unwrap());
    }
}

#[test]
fn join_with_invitation() {
    let creator = Credentials::from_private_key(
        &Config::local_testnet(),
        "tprv8ZgxMBicQKsPetcGAZY273DFjDSopBXJNEwFtK7nfCAnAficDoYmTGBRMLHxNoNdpxawo11wnfPoERHbqAcbbn7svZxunP55HPJeNSKoRUZ"
    ).unwrap();
    let secret = build_secret(
        &creator.root_prv_key(),
        "c1c3b65f-8f38-4fd7-a310-b95d7aa5b672",
        Coin::Btc,
        Network::Testnet
    ).unwrap();

    let transport = Recorder::new(r#"{"copayerId": "copayer-2", "wallet": {"id": "c1c3b65f-8f38-4fd7-a310-b95d7aa5b672", "m": 2, "n": 2}}"#);
    let joiner = credentials();
    let client = Client::new(Config::local_testnet(), joiner.clone(), &transport);

    let joined = client.join_wallet("bob", &secret).unwrap();
    assert_eq!(joined.copayer_id, "copayer-2");

    let body = transport.last_body();
    assert_eq!(body["xPubKey"], joiner.account_xpub_string());
    assert_eq!(body["requestPubKey"], joiner.request_pub_key().hex());
    assert_eq!(body["coin"], "btc");

    let signature = hex::decode(body["copayerSignature"].as_str().unwrap()).unwrap();
    let hash = format!("bob|{}|{}", joiner.account_xpub_string(), joiner.request_pub_key().hex());
    assert!(verify_message(hash.as_bytes(), &signature, &creator.root_pub_key()).unwrap());

    let sent = transport.sent.lock().unwrap();
    assert_eq!(sent[0].url, "http://localhost:3232/bws/api/v2/wallets/c1c3b65f-8f38-4fd7-a310-b95d7aa5b672/copayers");
}

#[test]
fn invalid_proposal_is_not_signed() {
    let mut txp: TxProposal = serde_json::from_str(PROPOSAL).unwrap();
    txp.outputs.push(TxOutput::new(1, "mnv9rH2VfAUX9YZzFkoRysGFtggvz1wRnY"));

    let transport = Recorder::new(PROPOSAL);
    let client = Client::new(Config::local_testnet(), credentials(), &transport);

    let err = client.sign_tx_proposal(&txp).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(transport.sent.lock().unwrap().is_empty());
}

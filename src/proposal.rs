/*
    Signing of wallet service transaction proposals.

    A proposal pays a single primary output plus an optional change output
    from inputs that are either single signature or bare multisig. The
    transaction is rebuilt locally from the proposal, then signed twice:
        - the proposal signature, a message signature over the hex of the
          serialized transaction made with the request key
        - one SIGHASH_ALL signature per input made with the key at the
          input's path
*/

use tracing::debug;

use crate::{
    address::Address,
    auth,
    config::Network,
    error::{Error, Result},
    hdwallet::Credentials,
    key::PrivKey,
    models::TxProposal,
    script::{opcodes, Script, ScriptBuilder},
    transaction::{OutPoint, Transaction, TxIn, TxOut}
};

/// Wallets that need this many signatures or more spend from multisig scripts
const MULTISIG_THRESHOLD: usize = 2;

impl TxProposal {
    /**
        Checks the proposal has the only shape that can be signed:
        one primary output, an output order and a change address.
    */
    pub fn validate(&self) -> Result<()> {
        if self.outputs.len() != 1 {
            return Err(Error::InvalidProposal(format!(
                "expected exactly one primary output, found {}", self.outputs.len()
            )))
        }

        if self.output_order.len() != 2 {
            return Err(Error::InvalidProposal(format!(
                "output order must have 2 entries, found {}", self.output_order.len()
            )))
        }

        if self.change_address.is_none() {
            return Err(Error::InvalidProposal("change address not specified".to_string()))
        }

        Ok(())
    }

    pub fn is_multisig(&self) -> bool {
        self.wallet_m >= MULTISIG_THRESHOLD
    }

    /// Sum of the inputs minus amount and fee
    pub fn change(&self) -> Result<i64> {
        let total: i64 = self.inputs.iter().map(|i| i.satoshis).sum();
        let change = total - self.amount - self.fee;
        if change < 0 {
            return Err(Error::InvalidProposal(format!(
                "inputs of {} do not cover amount {} and fee {}", total, self.amount, self.fee
            )))
        }

        Ok(change)
    }

    /**
        The multisig redeem script of the proposal, built from the public
        keys of the first input and shared by every input.
        Recomputed on each call, so edits to the proposal are always seen.
    */
    pub fn redeem_script(&self) -> Result<Script> {
        let first = self.inputs.first()
            .ok_or_else(|| Error::InvalidProposal("proposal has no inputs".to_string()))?;

        Script::multisig(self.wallet_m, first.public_keys.as_slice())
    }

    /**
        Rebuilds the unsigned transaction the proposal describes.
        Multisig inputs carry `OP_0 <redeem script>` so the other
        copayers see the same bytes, single signature inputs stay empty.
    */
    pub fn build_unsigned_transaction(&self, network: Network) -> Result<Transaction> {
        self.validate()?;

        let script_sig = if self.is_multisig() {
            ScriptBuilder::new()
                .push_opcode(opcodes::OP_0)
                .push_data(self.redeem_script()?.as_bytes())?
                .into_script()
        } else {
            Script::default()
        };

        let mut tx = Transaction::new();
        for input in &self.inputs {
            tx.inputs.push(TxIn::new(OutPoint::from_display_hex(&input.txid, input.vout)?, script_sig.clone()));
        }

        let to_script = Address::to_script_pubkey(&self.outputs[0].to_address, network)?;
        let change_address = self.change_address.as_ref()
            .ok_or_else(|| Error::InvalidProposal("change address not specified".to_string()))?;
        let change_script = Address::to_script_pubkey(&change_address.address, network)?;

        let primary = TxOut { value: self.amount, script_pubkey: to_script };
        let change = self.change()?;
        let change = if change > 0 {
            Some(TxOut { value: change, script_pubkey: change_script })
        } else {
            None
        };

        if self.output_order[0] == 0 {
            tx.outputs.push(primary);
            tx.outputs.extend(change);
        } else {
            tx.outputs.extend(change);
            tx.outputs.push(primary);
        }

        Ok(tx)
    }

    pub fn serialize(&self, network: Network) -> Result<Vec<u8>> {
        Ok(self.build_unsigned_transaction(network)?.serialize())
    }

    /**
        Message signature over the hex of the serialized transaction.
    */
    pub fn proposal_signature(&self, key: &PrivKey, network: Network) -> Result<Vec<u8>> {
        let tx = self.build_unsigned_transaction(network)?;
        Ok(auth::sign_message(tx.hex().as_bytes(), key))
    }

    /**
        SIGHASH_ALL signature of the input at `index`.
        Multisig inputs commit to the proposal's redeem script, others to their script pub key.
    */
    pub fn input_signature(&self, key: &PrivKey, network: Network, index: usize) -> Result<Vec<u8>> {
        let input = self.inputs.get(index).ok_or_else(|| Error::InvalidProposal(format!(
            "input index {} out of range, proposal has {} inputs", index, self.inputs.len()
        )))?;

        let tx = self.build_unsigned_transaction(network)?;
        let script_code = if self.is_multisig() {
            self.redeem_script()?
        } else {
            Script::from_hex(&input.script_pub_key)
                .map_err(|e| Error::Serialization(format!("bad script pub key on input {}: {}", index, e)))?
        };

        let digest = tx.signature_hash_all(index, &script_code)?;
        Ok(key.sign_digest(&digest))
    }

    /**
        Signs every input with the key derived at its path.
        Either all inputs are signed or an error is returned.
    */
    pub fn sign_inputs(&self, credentials: &Credentials) -> Result<Vec<Vec<u8>>> {
        if self.inputs.is_empty() {
            return Err(Error::InvalidProposal("proposal has no inputs".to_string()))
        }

        let signatures = self.inputs
            .iter()
            .enumerate()
            .map(|(i, input)| {
                let (key, _) = credentials.derive_from_account(&input.path)?;
                self.input_signature(&key, credentials.network(), i)
            })
            .collect::<Result<Vec<Vec<u8>>>>()?;

        debug!(proposal = %self.id, inputs = signatures.len(), "signed proposal inputs");
        Ok(signatures)
    }
}

use std::str::FromStr;

use async_trait::async_trait;
use serde_json::json;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcTransactionConfig;
use solana_client::rpc_request::RpcRequest;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_transaction_status::{
    EncodedConfirmedTransactionWithStatusMeta, EncodedTransaction, UiCompiledInstruction,
    UiInstruction, UiLoadedAddresses, UiMessage, UiParsedInstruction, UiTransactionEncoding,
    UiTransactionStatusMeta,
};

use crate::config::{Commitment, ScannerConfig};
use crate::core::error::SourceError;
use crate::source::ChainSource;
use crate::types::{RawInstruction, TransactionMessage};

/// `ChainSource` backed by a Solana JSON-RPC node.
pub struct RpcChainSource {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcChainSource {
    pub fn new(rpc_url: impl Into<String>, commitment: Commitment) -> Self {
        let commitment = commitment_config(commitment);
        Self {
            client: RpcClient::new_with_commitment(rpc_url.into(), commitment),
            commitment,
        }
    }

    pub fn from_config(config: &ScannerConfig) -> Self {
        Self::new(config.rpc_url.clone(), config.commitment)
    }
}

fn commitment_config(commitment: Commitment) -> CommitmentConfig {
    match commitment {
        Commitment::Processed => CommitmentConfig::processed(),
        Commitment::Confirmed => CommitmentConfig::confirmed(),
        Commitment::Finalized => CommitmentConfig::finalized(),
    }
}

fn parse_pubkey(address: &str) -> Result<Pubkey, SourceError> {
    Pubkey::from_str(address).map_err(|_| SourceError::InvalidAddress(address.to_string()))
}

#[async_trait]
impl ChainSource for RpcChainSource {
    async fn fetch_transaction(
        &self,
        signature: &str,
    ) -> Result<Option<TransactionMessage>, SourceError> {
        let signature = Signature::from_str(signature)
            .map_err(|_| SourceError::InvalidSignature(signature.to_string()))?;
        let config = RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::Json),
            commitment: Some(self.commitment),
            max_supported_transaction_version: Some(0),
        };

        // `getTransaction` answers `null` for unknown signatures.
        let encoded: Option<EncodedConfirmedTransactionWithStatusMeta> = self
            .client
            .send(
                RpcRequest::GetTransaction,
                json!([signature.to_string(), config]),
            )
            .await
            .map_err(SourceError::rpc("getTransaction"))?;

        encoded.map(convert_transaction).transpose()
    }

    async fn fetch_account(&self, address: &str) -> Result<Option<Vec<u8>>, SourceError> {
        let pubkey = parse_pubkey(address)?;
        let response = self
            .client
            .get_account_with_commitment(&pubkey, self.commitment)
            .await
            .map_err(SourceError::rpc("getAccountInfo"))?;
        Ok(response.value.map(|account| account.data))
    }

    async fn fetch_mint_decimals(&self, mint: &str) -> Result<u8, SourceError> {
        let pubkey = parse_pubkey(mint)?;
        let supply = self
            .client
            .get_token_supply_with_commitment(&pubkey, self.commitment)
            .await
            .map_err(SourceError::rpc("getTokenSupply"))?;
        Ok(supply.value.decimals)
    }
}

/// Converts an RPC transaction into the internal message shape.
pub fn convert_transaction(
    tx: EncodedConfirmedTransactionWithStatusMeta,
) -> Result<TransactionMessage, SourceError> {
    let ui_tx = match &tx.transaction.transaction {
        EncodedTransaction::Json(tx) => tx,
        _ => return Err(SourceError::unexpected("expected JSON encoded transaction")),
    };
    let signature = ui_tx
        .signatures
        .first()
        .cloned()
        .ok_or_else(|| SourceError::unexpected("transaction missing signature"))?;
    let meta = tx.transaction.meta.as_ref();

    let (account_keys, instructions) = match &ui_tx.message {
        UiMessage::Raw(raw) => {
            let mut account_keys = raw.account_keys.clone();
            append_loaded_addresses(&mut account_keys, meta);
            let instructions = raw
                .instructions
                .iter()
                .map(|ix| convert_compiled_instruction(ix, &account_keys))
                .collect::<Result<Vec<_>, _>>()?;
            (account_keys, instructions)
        }
        UiMessage::Parsed(parsed) => {
            let mut account_keys: Vec<String> = parsed
                .account_keys
                .iter()
                .map(|account| account.pubkey.clone())
                .collect();
            append_loaded_addresses(&mut account_keys, meta);
            let instructions = parsed
                .instructions
                .iter()
                .map(|ix| convert_ui_instruction(ix, &account_keys))
                .collect::<Result<Vec<_>, _>>()?;
            (account_keys, instructions)
        }
    };

    Ok(TransactionMessage {
        signature,
        slot: tx.slot,
        account_keys,
        instructions,
    })
}

fn append_loaded_addresses(keys: &mut Vec<String>, meta: Option<&UiTransactionStatusMeta>) {
    let Some(meta) = meta else {
        return;
    };
    if let Some(loaded) = Option::<&UiLoadedAddresses>::from(meta.loaded_addresses.as_ref()) {
        keys.extend(loaded.writable.iter().cloned());
        keys.extend(loaded.readonly.iter().cloned());
    }
}

fn decode_base58(data: &str) -> Result<Vec<u8>, SourceError> {
    bs58::decode(data)
        .into_vec()
        .map_err(|err| SourceError::unexpected(format!("invalid base58 instruction data: {err}")))
}

fn convert_compiled_instruction(
    instruction: &UiCompiledInstruction,
    account_keys: &[String],
) -> Result<RawInstruction, SourceError> {
    let program_id = account_keys
        .get(instruction.program_id_index as usize)
        .cloned()
        .ok_or_else(|| {
            SourceError::unexpected(format!(
                "program id index {} outside {} account keys",
                instruction.program_id_index,
                account_keys.len()
            ))
        })?;

    Ok(RawInstruction {
        program_id,
        accounts: instruction
            .accounts
            .iter()
            .map(|index| *index as usize)
            .collect(),
        data: decode_base58(&instruction.data)?,
    })
}

fn convert_ui_instruction(
    instruction: &UiInstruction,
    account_keys: &[String],
) -> Result<RawInstruction, SourceError> {
    match instruction {
        UiInstruction::Compiled(compiled) => convert_compiled_instruction(compiled, account_keys),
        UiInstruction::Parsed(UiParsedInstruction::PartiallyDecoded(instruction)) => {
            let accounts = instruction
                .accounts
                .iter()
                .map(|address| {
                    account_keys
                        .iter()
                        .position(|key| key == address)
                        .ok_or_else(|| {
                            SourceError::unexpected(format!(
                                "instruction account {address} missing from account keys"
                            ))
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(RawInstruction {
                program_id: instruction.program_id.clone(),
                accounts,
                data: decode_base58(&instruction.data)?,
            })
        }
        // Fully parsed instructions belong to native programs and carry no
        // raw payload.
        UiInstruction::Parsed(UiParsedInstruction::Parsed(instruction)) => Ok(RawInstruction {
            program_id: instruction.program_id.clone(),
            accounts: Vec::new(),
            data: Vec::new(),
        }),
    }
}

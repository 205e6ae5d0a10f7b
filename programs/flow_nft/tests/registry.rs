use anchor_lang::prelude::*;
use anchor_lang::{InstructionData, ToAccountMetas};
use flow_nft::errors::FlowNftError;
use flow_nft::instructions::InitializeRegistryParams;
use flow_nft::state::{
    FlowIdentity, InteractionKind, RegistryConfig, StateLevel, TokenRecord, IDENTITY_SEED,
    REGISTRY_SEED, TOKEN_SEED,
};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::account::Account as SolanaAccount;
use solana_sdk::instruction::{Instruction, InstructionError};
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::{Transaction, TransactionError};

fn flow_nft_entry(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> std::result::Result<(), ProgramError> {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    flow_nft::entry(program_id, accounts, data)
}

fn funded_wallet(program_test: &mut ProgramTest) -> Keypair {
    let wallet = Keypair::new();
    program_test.add_account(
        wallet.pubkey(),
        SolanaAccount {
            lamports: 10_000_000_000,
            owner: anchor_lang::system_program::ID,
            ..SolanaAccount::default()
        },
    );
    wallet
}

fn config_pda() -> Pubkey {
    Pubkey::find_program_address(&[REGISTRY_SEED], &flow_nft::ID).0
}

fn identity_pda(owner: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[IDENTITY_SEED, owner.as_ref()], &flow_nft::ID).0
}

fn token_pda(token_id: u64) -> Pubkey {
    Pubkey::find_program_address(&[TOKEN_SEED, &token_id.to_le_bytes()], &flow_nft::ID).0
}

fn custom_error(err: BanksClientError) -> (u8, u32) {
    match err.unwrap() {
        TransactionError::InstructionError(index, InstructionError::Custom(code)) => (index, code),
        other => panic!("expected a custom program error, got {:?}", other),
    }
}

struct Registry {
    ctx: ProgramTestContext,
    admin: Keypair,
    alice: Keypair,
    bob: Keypair,
}

impl Registry {
    async fn start() -> Self {
        let mut program_test =
            ProgramTest::new("flow_nft", flow_nft::ID, processor!(flow_nft_entry));
        program_test.prefer_bpf(false);
        let admin = funded_wallet(&mut program_test);
        let alice = funded_wallet(&mut program_test);
        let bob = funded_wallet(&mut program_test);

        let mut registry = Self {
            ctx: program_test.start_with_context().await,
            admin,
            alice,
            bob,
        };

        let ix = Instruction {
            program_id: flow_nft::ID,
            accounts: flow_nft::accounts::InitializeRegistry {
                admin: registry.admin.pubkey(),
                config: config_pda(),
                system_program: anchor_lang::system_program::ID,
            }
            .to_account_metas(None),
            data: flow_nft::instruction::InitializeRegistry {
                params: InitializeRegistryParams::default(),
            }
            .data(),
        };
        let admin = registry.admin.insecure_clone();
        registry.send(ix, &admin).await.unwrap();
        registry
    }

    async fn send(
        &mut self,
        ix: Instruction,
        signer: &Keypair,
    ) -> std::result::Result<(), BanksClientError> {
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&self.ctx.payer.pubkey()),
            &[&self.ctx.payer, signer],
            self.ctx.last_blockhash,
        );
        self.ctx.banks_client.process_transaction(tx).await
    }

    async fn account<T: AccountDeserialize>(&mut self, address: Pubkey) -> Option<T> {
        let account = self.ctx.banks_client.get_account(address).await.unwrap()?;
        Some(T::try_deserialize(&mut account.data.as_slice()).unwrap())
    }

    async fn next_token_id(&mut self) -> u64 {
        let config: RegistryConfig = self.account(config_pda()).await.unwrap();
        config.next_token_id
    }

    async fn mint(&mut self, owner: &Keypair) -> std::result::Result<(), BanksClientError> {
        let token_id = self.next_token_id().await;
        let ix = Instruction {
            program_id: flow_nft::ID,
            accounts: flow_nft::accounts::MintIdentity {
                owner: owner.pubkey(),
                config: config_pda(),
                identity: identity_pda(&owner.pubkey()),
                token_record: token_pda(token_id),
                system_program: anchor_lang::system_program::ID,
            }
            .to_account_metas(None),
            data: flow_nft::instruction::Mint {}.data(),
        };
        self.send(ix, owner).await
    }
}

#[tokio::test]
async fn mint_assigns_sequential_ids() {
    let mut registry = Registry::start().await;
    let alice = registry.alice.insecure_clone();
    let bob = registry.bob.insecure_clone();

    registry.mint(&alice).await.unwrap();
    registry.mint(&bob).await.unwrap();

    let identity: FlowIdentity = registry.account(identity_pda(&bob.pubkey())).await.unwrap();
    assert_eq!(identity.token_id, 2);
    assert_eq!(identity.state_level, StateLevel::Idle);
    assert_eq!(identity.total_interactions(), 0);

    let record: TokenRecord = registry.account(token_pda(1)).await.unwrap();
    assert_eq!(record.owner, alice.pubkey());
}

#[tokio::test]
async fn second_mint_reports_already_registered() {
    let mut registry = Registry::start().await;
    let alice = registry.alice.insecure_clone();

    registry.mint(&alice).await.unwrap();
    let err = registry.mint(&alice).await.unwrap_err();

    assert_eq!(custom_error(err), (0, u32::from(FlowNftError::AlreadyRegistered)));
    assert_eq!(registry.next_token_id().await, 2);
}

#[tokio::test]
async fn unbound_signer_cannot_record_interactions() {
    let mut registry = Registry::start().await;
    let alice = registry.alice.insecure_clone();
    let bob = registry.bob.insecure_clone();
    registry.mint(&alice).await.unwrap();

    let ix = Instruction {
        program_id: flow_nft::ID,
        accounts: flow_nft::accounts::RecordInteraction {
            recorder: bob.pubkey(),
            config: config_pda(),
            identity: identity_pda(&alice.pubkey()),
        }
        .to_account_metas(None),
        data: flow_nft::instruction::RecordInteraction {
            kind: InteractionKind::LikeReceived,
            delta: 1,
        }
        .data(),
    };
    let err = registry.send(ix, &bob).await.unwrap_err();

    assert_eq!(custom_error(err), (0, u32::from(FlowNftError::Unauthorized)));
    let identity: FlowIdentity = registry.account(identity_pda(&alice.pubkey())).await.unwrap();
    assert_eq!(identity.likes_received, 0);
}

#[tokio::test]
async fn recorder_binds_only_once() {
    let mut registry = Registry::start().await;
    let admin = registry.admin.insecure_clone();
    let bind = |program: Pubkey| Instruction {
        program_id: flow_nft::ID,
        accounts: flow_nft::accounts::BindRecorder {
            admin: admin.pubkey(),
            config: config_pda(),
        }
        .to_account_metas(None),
        data: flow_nft::instruction::BindTipModule {
            recorder_program: program,
        }
        .data(),
    };

    registry.send(bind(Pubkey::new_unique()), &admin).await.unwrap();
    let err = registry.send(bind(Pubkey::new_unique()), &admin).await.unwrap_err();

    assert_eq!(custom_error(err), (0, u32::from(FlowNftError::RecorderAlreadyBound)));
}

#[tokio::test]
async fn only_admin_binds_recorders() {
    let mut registry = Registry::start().await;
    let alice = registry.alice.insecure_clone();

    let ix = Instruction {
        program_id: flow_nft::ID,
        accounts: flow_nft::accounts::BindRecorder {
            admin: alice.pubkey(),
            config: config_pda(),
        }
        .to_account_metas(None),
        data: flow_nft::instruction::BindActivityTracker {
            recorder_program: Pubkey::new_unique(),
        }
        .data(),
    };
    let err = registry.send(ix, &alice).await.unwrap_err();

    assert_eq!(custom_error(err), (0, u32::from(FlowNftError::Unauthorized)));
}

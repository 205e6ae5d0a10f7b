use anchor_lang::prelude::*;
use anchor_lang::{InstructionData, ToAccountMetas};
use flow_nft::errors::FlowNftError;
use flow_nft::instructions::InitializeRegistryParams;
use flow_nft::state::{FlowIdentity, RegistryConfig, IDENTITY_SEED, REGISTRY_SEED, TOKEN_SEED};
use flow_nft::RECORDER_SEED;
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::account::Account as SolanaAccount;
use solana_sdk::instruction::{AccountMeta, Instruction, InstructionError};
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::system_instruction;
use solana_sdk::transaction::{Transaction, TransactionError};
use tip_module::errors::TipError;
use tip_module::state::{TipLedger, DEFAULT_MIN_TIP, LEDGER_SEED, TIP_CONFIG_SEED, VAULT_SEED};

const MIN: u64 = DEFAULT_MIN_TIP;

fn flow_nft_entry(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> std::result::Result<(), ProgramError> {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    flow_nft::entry(program_id, accounts, data)
}

fn tip_module_entry(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> std::result::Result<(), ProgramError> {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    tip_module::entry(program_id, accounts, data)
}

fn pda(seeds: &[&[u8]], program: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(seeds, program).0
}

fn registry_pda() -> Pubkey {
    pda(&[REGISTRY_SEED], &flow_nft::ID)
}

fn identity_pda(owner: &Pubkey) -> Pubkey {
    pda(&[IDENTITY_SEED, owner.as_ref()], &flow_nft::ID)
}

fn ledger_pda(owner: &Pubkey) -> Pubkey {
    pda(&[LEDGER_SEED, owner.as_ref()], &tip_module::ID)
}

fn custom_error(err: BanksClientError) -> (u8, u32) {
    match err.unwrap() {
        TransactionError::InstructionError(index, InstructionError::Custom(code)) => (index, code),
        other => panic!("expected a custom program error, got {:?}", other),
    }
}

fn system_account(lamports: u64) -> SolanaAccount {
    SolanaAccount {
        lamports,
        owner: anchor_lang::system_program::ID,
        ..SolanaAccount::default()
    }
}

/// Registry and tip module wired together, with alice and bob minted and
/// carol left without an identity.
struct Escrow {
    ctx: ProgramTestContext,
    alice: Keypair,
    bob: Keypair,
    carol: Keypair,
}

impl Escrow {
    async fn start() -> Self {
        let mut program_test =
            ProgramTest::new("tip_module", tip_module::ID, processor!(tip_module_entry));
        program_test.add_program("flow_nft", flow_nft::ID, processor!(flow_nft_entry));
        program_test.prefer_bpf(false);

        let (admin, alice, bob, carol) =
            (Keypair::new(), Keypair::new(), Keypair::new(), Keypair::new());
        for wallet in [&admin, &alice, &bob, &carol] {
            program_test.add_account(wallet.pubkey(), system_account(10_000_000_000));
        }

        let mut escrow = Self {
            ctx: program_test.start_with_context().await,
            alice,
            bob,
            carol,
        };

        let init_registry = Instruction {
            program_id: flow_nft::ID,
            accounts: flow_nft::accounts::InitializeRegistry {
                admin: admin.pubkey(),
                config: registry_pda(),
                system_program: anchor_lang::system_program::ID,
            }
            .to_account_metas(None),
            data: flow_nft::instruction::InitializeRegistry {
                params: InitializeRegistryParams::default(),
            }
            .data(),
        };
        let bind = Instruction {
            program_id: flow_nft::ID,
            accounts: flow_nft::accounts::BindRecorder {
                admin: admin.pubkey(),
                config: registry_pda(),
            }
            .to_account_metas(None),
            data: flow_nft::instruction::BindTipModule {
                recorder_program: tip_module::ID,
            }
            .data(),
        };
        let init_tips = Instruction {
            program_id: tip_module::ID,
            accounts: tip_module::accounts::InitializeTipModule {
                authority: admin.pubkey(),
                config: pda(&[TIP_CONFIG_SEED], &tip_module::ID),
                vault: pda(&[VAULT_SEED], &tip_module::ID),
                system_program: anchor_lang::system_program::ID,
            }
            .to_account_metas(None),
            data: tip_module::instruction::InitializeTipModule { min_tip: MIN }.data(),
        };
        escrow
            .send(&[init_registry, bind, init_tips], &admin)
            .await
            .unwrap();

        let alice = escrow.alice.insecure_clone();
        let bob = escrow.bob.insecure_clone();
        escrow.mint(&alice).await;
        escrow.mint(&bob).await;
        escrow
    }

    async fn send(
        &mut self,
        ixs: &[Instruction],
        signer: &Keypair,
    ) -> std::result::Result<(), BanksClientError> {
        let tx = Transaction::new_signed_with_payer(
            ixs,
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

    async fn balance(&mut self, address: Pubkey) -> u64 {
        self.ctx.banks_client.get_balance(address).await.unwrap()
    }

    async fn mint(&mut self, owner: &Keypair) {
        let config: RegistryConfig = self.account(registry_pda()).await.unwrap();
        let ix = Instruction {
            program_id: flow_nft::ID,
            accounts: flow_nft::accounts::MintIdentity {
                owner: owner.pubkey(),
                config: registry_pda(),
                identity: identity_pda(&owner.pubkey()),
                token_record: pda(
                    &[TOKEN_SEED, &config.next_token_id.to_le_bytes()],
                    &flow_nft::ID,
                ),
                system_program: anchor_lang::system_program::ID,
            }
            .to_account_metas(None),
            data: flow_nft::instruction::Mint {}.data(),
        };
        self.send(&[ix], owner).await.unwrap();
    }

    fn tip_ix(sender: &Pubkey, target: &Pubkey, amount: u64) -> Instruction {
        Instruction {
            program_id: tip_module::ID,
            accounts: tip_module::accounts::Tip {
                sender: *sender,
                config: pda(&[TIP_CONFIG_SEED], &tip_module::ID),
                vault: pda(&[VAULT_SEED], &tip_module::ID),
                sender_ledger: ledger_pda(sender),
                target_ledger: ledger_pda(target),
                sender_identity: identity_pda(sender),
                target_identity: identity_pda(target),
                registry_config: registry_pda(),
                recorder: pda(&[RECORDER_SEED], &tip_module::ID),
                flow_nft_program: flow_nft::ID,
                system_program: anchor_lang::system_program::ID,
            }
            .to_account_metas(None),
            data: tip_module::instruction::Tip {
                target: *target,
                amount,
            }
            .data(),
        }
    }

    fn batch_tip_ix(sender: &Pubkey, targets: &[Pubkey], amounts: &[u64]) -> Instruction {
        let mut accounts = tip_module::accounts::BatchTip {
            sender: *sender,
            config: pda(&[TIP_CONFIG_SEED], &tip_module::ID),
            vault: pda(&[VAULT_SEED], &tip_module::ID),
            sender_ledger: ledger_pda(sender),
            sender_identity: identity_pda(sender),
            registry_config: registry_pda(),
            recorder: pda(&[RECORDER_SEED], &tip_module::ID),
            flow_nft_program: flow_nft::ID,
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None);
        for target in targets {
            accounts.push(AccountMeta::new(ledger_pda(target), false));
            accounts.push(AccountMeta::new(identity_pda(target), false));
        }

        Instruction {
            program_id: tip_module::ID,
            accounts,
            data: tip_module::instruction::BatchTip {
                targets: targets.to_vec(),
                amounts: amounts.to_vec(),
                attached_value: amounts.iter().sum(),
            }
            .data(),
        }
    }

    fn withdraw_ix(recipient: &Pubkey) -> Instruction {
        Instruction {
            program_id: tip_module::ID,
            accounts: tip_module::accounts::Withdraw {
                recipient: *recipient,
                config: pda(&[TIP_CONFIG_SEED], &tip_module::ID),
                vault: pda(&[VAULT_SEED], &tip_module::ID),
                ledger: ledger_pda(recipient),
                system_program: anchor_lang::system_program::ID,
            }
            .to_account_metas(None),
            data: tip_module::instruction::Withdraw {}.data(),
        }
    }
}

#[tokio::test]
async fn first_tip_to_yourself_reports_self_interaction() {
    let mut escrow = Escrow::start().await;
    let alice = escrow.alice.insecure_clone();

    let ix = Escrow::tip_ix(&alice.pubkey(), &alice.pubkey(), MIN);
    let err = escrow.send(&[ix], &alice).await.unwrap_err();

    assert_eq!(custom_error(err), (0, u32::from(TipError::SelfInteraction)));
    assert!(escrow
        .account::<TipLedger>(ledger_pda(&alice.pubkey()))
        .await
        .is_none());
}

#[tokio::test]
async fn tip_below_minimum_is_rejected() {
    let mut escrow = Escrow::start().await;
    let alice = escrow.alice.insecure_clone();
    let bob = escrow.bob.insecure_clone();

    let ix = Escrow::tip_ix(&alice.pubkey(), &bob.pubkey(), MIN - 1);
    let err = escrow.send(&[ix], &alice).await.unwrap_err();

    assert_eq!(custom_error(err), (0, u32::from(TipError::BelowMinimum)));
}

#[tokio::test]
async fn withdraw_pays_out_exactly_the_pending_balance() {
    let mut escrow = Escrow::start().await;
    let alice = escrow.alice.insecure_clone();
    let bob = escrow.bob.insecure_clone();

    let ix = Escrow::tip_ix(&alice.pubkey(), &bob.pubkey(), 3 * MIN);
    escrow.send(&[ix], &alice).await.unwrap();

    let ledger: TipLedger = escrow.account(ledger_pda(&bob.pubkey())).await.unwrap();
    assert_eq!(ledger.pending, 3 * MIN);
    let identity: FlowIdentity = escrow.account(identity_pda(&bob.pubkey())).await.unwrap();
    assert_eq!(identity.tips_received, 1);

    let before = escrow.balance(bob.pubkey()).await;
    escrow
        .send(&[Escrow::withdraw_ix(&bob.pubkey())], &bob)
        .await
        .unwrap();
    let after = escrow.balance(bob.pubkey()).await;

    assert_eq!(after - before, 3 * MIN);
    let ledger: TipLedger = escrow.account(ledger_pda(&bob.pubkey())).await.unwrap();
    assert_eq!(ledger.pending, 0);
    assert_eq!(ledger.total_received, 3 * MIN);
}

#[tokio::test]
async fn withdraw_without_tips_reports_nothing_to_withdraw() {
    let mut escrow = Escrow::start().await;
    let carol = escrow.carol.insecure_clone();

    let err = escrow
        .send(&[Escrow::withdraw_ix(&carol.pubkey())], &carol)
        .await
        .unwrap_err();

    assert_eq!(custom_error(err), (0, u32::from(TipError::NothingToWithdraw)));
}

#[tokio::test]
async fn batch_with_unminted_target_applies_nothing() {
    let mut escrow = Escrow::start().await;
    let alice = escrow.alice.insecure_clone();
    let bob = escrow.bob.insecure_clone();
    let carol = escrow.carol.insecure_clone();

    let before = escrow.balance(alice.pubkey()).await;
    let ix = Escrow::batch_tip_ix(&alice.pubkey(), &[bob.pubkey(), carol.pubkey()], &[MIN, MIN]);
    let err = escrow.send(&[ix], &alice).await.unwrap_err();

    assert_eq!(custom_error(err), (0, u32::from(FlowNftError::UnknownIdentity)));
    assert_eq!(escrow.balance(alice.pubkey()).await, before);
    assert!(escrow
        .account::<TipLedger>(ledger_pda(&bob.pubkey()))
        .await
        .is_none());
    let identity: FlowIdentity = escrow.account(identity_pda(&bob.pubkey())).await.unwrap();
    assert_eq!(identity.tips_received, 0);
}

#[tokio::test]
async fn stray_lamports_on_a_ledger_address_do_not_block_batches() {
    let mut escrow = Escrow::start().await;
    let alice = escrow.alice.insecure_clone();
    let bob = escrow.bob.insecure_clone();

    let stray = system_instruction::transfer(&alice.pubkey(), &ledger_pda(&bob.pubkey()), 1);
    escrow.send(&[stray], &alice).await.unwrap();

    let ix = Escrow::batch_tip_ix(&alice.pubkey(), &[bob.pubkey()], &[MIN]);
    escrow.send(&[ix], &alice).await.unwrap();

    let ledger: TipLedger = escrow.account(ledger_pda(&bob.pubkey())).await.unwrap();
    assert_eq!(ledger.owner, bob.pubkey());
    assert_eq!(ledger.pending, MIN);
}

#[tokio::test]
async fn stray_lamports_on_a_ledger_address_do_not_block_tips() {
    let mut escrow = Escrow::start().await;
    let alice = escrow.alice.insecure_clone();
    let bob = escrow.bob.insecure_clone();

    let stray = system_instruction::transfer(&bob.pubkey(), &ledger_pda(&alice.pubkey()), 1);
    escrow.send(&[stray], &bob).await.unwrap();

    let ix = Escrow::tip_ix(&bob.pubkey(), &alice.pubkey(), MIN);
    escrow.send(&[ix], &bob).await.unwrap();

    let ledger: TipLedger = escrow.account(ledger_pda(&alice.pubkey())).await.unwrap();
    assert_eq!(ledger.pending, MIN);
}

use {
  common::fixtures,
  num_bigint::BigInt,
  txsim_classifier::{
    classify,
    Category,
    ChangeView,
    Describe,
    TransferDirection,
  },
  txsim_primitives::{
    AmountChange,
    Erc20ApprovalData,
    Erc20TransferData,
    EvmChange,
    EvmStateChange,
  },
};

mod common;

#[test]
fn swap_eth_for_dai() -> anyhow::Result<()> {
  let response = common::evm(fixtures::SWAP_ETH_FOR_DAI)?;
  let grouped = classify(response.expected_state_changes());

  // the ETH leg is tagged NATIVE_ASSET_TRANSFER but carries an
  // erc20 payload, the payload decides.
  assert_eq!(grouped.transfers.len(), 2);
  assert!(grouped.approvals.is_empty());
  assert!(!grouped.has_multiple_categories());
  assert_eq!(
    grouped.transfers[0].human_readable_diff,
    "Receive 1530.81307 DAI"
  );
  assert_eq!(grouped.transfers[1].human_readable_diff, "Send 1 ETH");
  Ok(())
}

#[test]
fn erc20_approval_only() -> anyhow::Result<()> {
  let response = common::evm(fixtures::ERC20_APPROVAL)?;
  let grouped = classify(response.expected_state_changes());

  assert!(grouped.transfers.is_empty());
  assert_eq!(grouped.approvals.len(), 1);
  assert!(matches!(
    grouped.approvals[0].change,
    EvmChange::Erc20Approval(_)
  ));
  Ok(())
}

#[test]
fn approvals_for_all_are_approvals() -> anyhow::Result<()> {
  for fixture in [
    fixtures::ERC721_APPROVE_FOR_ALL,
    fixtures::ERC1155_APPROVE_FOR_ALL,
  ] {
    let grouped = classify(common::evm(fixture)?.expected_state_changes());
    assert!(grouped.transfers.is_empty());
    assert_eq!(grouped.approvals.len(), 1);
    assert!(grouped.stake_authority_changes.is_empty());
  }
  Ok(())
}

#[test]
fn mixed_response_keeps_order_and_drops_unknown() -> anyhow::Result<()> {
  let response = common::evm(fixtures::MIXED_EVM)?;
  let input = response.expected_state_changes();
  let grouped = classify(input);

  fn diffs(changes: &[EvmStateChange]) -> Vec<&str> {
    changes
      .iter()
      .map(|c| c.human_readable_diff.as_str())
      .collect()
  }

  assert_eq!(diffs(&grouped.transfers), [
    "Send 14.4539 LINK",
    "Receive 14.4539 LINK",
    "Send Invisible Friends #4",
    "Send INVSBLE #4",
    "Send 1 ETH",
  ]);
  assert_eq!(diffs(&grouped.approvals), [
    "Approve 10 LINK",
    "Approve MoonCats #2585"
  ]);
  assert!(grouped.stake_authority_changes.is_empty());

  // the ERC4626 deposit is not known and is dropped
  assert_eq!(input.len(), 8);
  assert_eq!(grouped.len(), 7);
  assert!(grouped.has_multiple_categories());

  // every classified record is one of the inputs, unmodified
  for category in [Category::Transfer, Category::Approval] {
    for change in grouped.bucket(category) {
      assert!(input.contains(change));
    }
  }
  Ok(())
}

#[test]
fn null_display_fields_do_not_drop_records() -> anyhow::Result<()> {
  let response = common::evm(fixtures::NULL_FIELDS)?;
  let input = response.expected_state_changes();
  assert_eq!(input.len(), 3);

  let grouped = classify(input);
  assert_eq!(grouped.transfers.len(), 3);
  assert!(grouped.approvals.is_empty());

  match &grouped.transfers[1].change {
    EvmChange::Erc721Transfer(d) => {
      assert_eq!(d.name, "");
      assert_eq!(d.symbol, "");
      assert_eq!(d.contract.kind, "");
      assert_eq!(d.token_id.as_deref(), Some("7238"));
    }
    other => panic!("unexpected {other:?}"),
  }
  match &grouped.transfers[2].change {
    EvmChange::Erc20Transfer(d) => {
      assert_eq!(d.asset.decimals, 0);
      assert!(!d.asset.verified);
      assert!(d.asset.lists.is_empty());
    }
    other => panic!("unexpected {other:?}"),
  }
  Ok(())
}

#[test]
fn solana_buckets() -> anyhow::Result<()> {
  let grouped = classify(
    common::svm(fixtures::STAKE_AUTHORITY_CHANGE)?.expected_state_changes(),
  );
  assert_eq!(grouped.stake_authority_changes.len(), 1);
  assert_eq!(grouped.transfers.len(), 1);
  assert!(grouped.approvals.is_empty());

  let grouped =
    classify(common::svm(fixtures::SPL_NFT_SEND)?.expected_state_changes());
  assert_eq!(grouped.transfers.len(), 2);
  assert_eq!(grouped.approvals.len(), 1);
  assert_eq!(grouped.categories().collect::<Vec<_>>(), [
    Category::Transfer,
    Category::Approval
  ]);
  Ok(())
}

#[test]
fn transfer_and_approval_end_to_end() -> anyhow::Result<()> {
  let changes = vec![
    EvmStateChange::new(
      "Send 50 TKN",
      EvmChange::Erc20Transfer(Erc20TransferData {
        amount: AmountChange::new("100", "50"),
        ..Default::default()
      }),
    ),
    EvmStateChange::new(
      "Approve 1000 TKN",
      EvmChange::Erc20Approval(Erc20ApprovalData {
        amount: AmountChange::new("0", "1000"),
        ..Default::default()
      }),
    ),
  ];

  let grouped = classify(&changes);
  assert_eq!(grouped.transfers.len(), 1);
  assert_eq!(grouped.approvals.len(), 1);

  let transfer = &grouped.transfers[0];
  match &transfer.change {
    EvmChange::Erc20Transfer(d) => {
      assert_eq!(d.amount.delta()?, BigInt::from(-50));
    }
    other => panic!("unexpected {other:?}"),
  }

  match transfer.describe()? {
    Some(ChangeView::Transfer(view)) => {
      assert_eq!(view.direction, TransferDirection::Send);
      assert_eq!(view.amount, "50");
    }
    other => panic!("unexpected {other:?}"),
  }
  Ok(())
}

use crate::storage::residents::{ResidentRecord, ResidentsStorageFunc};
use crate::utils::core::{get_manager, page_bounds};
use crate::utils::payments::next_payment;
use condominium_interface::{ContractErrors, Resident, ResidentPage};
use log::info;
use soroban_sdk::{panic_with_error, Address, Env, Vec};

pub fn get_record(e: &Env, wallet: &Address) -> ResidentRecord {
    e._residents().record(wallet).unwrap_or_else(|| {
        panic_with_error!(&e, &ContractErrors::NotAResident);
    })
}

pub fn to_resident(e: &Env, record: &ResidentRecord) -> Resident {
    Resident {
        wallet: record.wallet.clone(),
        residence: record.residence,
        is_counselor: record.is_counselor,
        is_manager: record.wallet == get_manager(e),
        next_payment: next_payment(e, record.residence),
    }
}

/// Places `wallet` in `residence_id`.
/// Whoever lived there before is dropped from the registry and a wallet that already
/// lived somewhere else moves, keeping its position in the listing and its counselor flag.
pub fn settle_resident(e: &Env, wallet: &Address, residence_id: u32) {
    let residents = e._residents();
    let mut wallets: Vec<Address> = residents.wallets();

    if let Some(occupant) = residents.occupant(residence_id) {
        if &occupant != wallet {
            info!("residence {} vacated by {:?}", residence_id, occupant);
            residents.remove_record(&occupant);
            if let Some(index) = wallets.first_index_of(&occupant) {
                wallets.remove(index);
            }
        }
    }

    let record: ResidentRecord = match residents.record(wallet) {
        Some(mut record) => {
            if record.residence != residence_id {
                residents.remove_occupant(record.residence);
            }
            record.residence = residence_id;
            record
        }
        None => {
            wallets.push_back(wallet.clone());
            ResidentRecord {
                wallet: wallet.clone(),
                residence: residence_id,
                is_counselor: false,
            }
        }
    };

    residents.set_record(&record);
    residents.set_occupant(residence_id, wallet);
    residents.set_wallets(&wallets);
}

pub fn evict_resident(e: &Env, record: &ResidentRecord) {
    let residents = e._residents();
    let mut wallets: Vec<Address> = residents.wallets();

    if let Some(index) = wallets.first_index_of(&record.wallet) {
        wallets.remove(index);
    }

    residents.remove_record(&record.wallet);
    residents.remove_occupant(record.residence);
    residents.set_wallets(&wallets);
}

pub fn get_residents_page(e: &Env, page: u32, page_size: u32) -> ResidentPage {
    let wallets: Vec<Address> = e._residents().wallets();
    let mut residents: Vec<Resident> = Vec::new(&e);

    if let Some((start, end)) = page_bounds(wallets.len(), page, page_size) {
        for wallet in wallets.slice(start..end).iter() {
            if let Some(record) = e._residents().record(&wallet) {
                residents.push_back(to_resident(e, &record));
            }
        }
    }

    ResidentPage {
        residents,
        total: wallets.len(),
    }
}

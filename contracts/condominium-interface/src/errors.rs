use soroban_sdk::contracterror;

/// Groups errors the way callers react to them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Initialization,
    PermissionDenied,
    NotFound,
    InvalidInput,
    InvalidState,
    AlreadyExists,
    InsufficientResource,
    Funds,
}

/// Codes are wire-stable, each block maps to one `ErrorKind`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractErrors {
    // Initialization
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidLayout = 3,
    InvalidQuorum = 4,

    // Permissions
    NotManager = 100,
    NotManagerOrCounselor = 101,
    NotManagerOrResident = 102,

    // Lookups
    UnknownResidence = 200,
    UnknownTopic = 201,
    NotAResident = 202,
    CounselorNotFound = 203,

    // Arguments
    InvalidAddress = 300,
    InvalidCategory = 301,
    InvalidAmount = 302,
    EmptyVote = 303,

    // Transitions
    NotIdle = 400,
    NotVoting = 401,
    NotRemovable = 402,
    WrongCategoryOrStatus = 403,
    ResidentIsCounselor = 404,
    NotCompliant = 405,
    CandidateNotResident = 406,

    // Uniqueness
    DuplicateTopic = 500,
    DuplicateVote = 501,
    AlreadyPaidThisWindow = 502,

    // Thresholds and balances
    QuorumNotReached = 600,
    AmountExceedsApproved = 601,
    InsufficientBalance = 602,

    // Token movements
    PaymentFailed = 700,
    TransferFailed = 701,
}

impl ContractErrors {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            0..=99 => ErrorKind::Initialization,
            100..=199 => ErrorKind::PermissionDenied,
            200..=299 => ErrorKind::NotFound,
            300..=399 => ErrorKind::InvalidInput,
            400..=499 => ErrorKind::InvalidState,
            500..=599 => ErrorKind::AlreadyExists,
            600..=699 => ErrorKind::InsufficientResource,
            _ => ErrorKind::Funds,
        }
    }

    /// Human readable reason, mostly for logs and front ends.
    pub fn description(&self) -> &'static str {
        match self {
            ContractErrors::NotInitialized => "contract not initialized",
            ContractErrors::AlreadyInitialized => "contract already initialized",
            ContractErrors::InvalidLayout => "invalid building layout",
            ContractErrors::InvalidQuorum => "quorum thresholds must be positive",
            ContractErrors::NotManager => "only the manager can execute this operation",
            ContractErrors::NotManagerOrCounselor => {
                "only the manager or a counselor can execute this operation"
            }
            ContractErrors::NotManagerOrResident => {
                "only the manager or a resident can execute this operation"
            }
            ContractErrors::UnknownResidence => "residence does not exist",
            ContractErrors::UnknownTopic => "topic does not exist",
            ContractErrors::NotAResident => "wallet is not a resident",
            ContractErrors::CounselorNotFound => "counselor not found",
            ContractErrors::InvalidAddress => "invalid wallet address",
            ContractErrors::InvalidCategory => "invalid category",
            ContractErrors::InvalidAmount => "invalid amount",
            ContractErrors::EmptyVote => "vote cannot be empty",
            ContractErrors::NotIdle => "only idle topics accept this operation",
            ContractErrors::NotVoting => "only topics in voting accept this operation",
            ContractErrors::NotRemovable => "topic cannot be removed",
            ContractErrors::WrongCategoryOrStatus => "only approved spend topics can be spent",
            ContractErrors::ResidentIsCounselor => "a counselor cannot be removed",
            ContractErrors::NotCompliant => "residence quota is not paid",
            ContractErrors::CandidateNotResident => "manager candidate is not a resident",
            ContractErrors::DuplicateTopic => "topic already exists",
            ContractErrors::DuplicateVote => "a residence can vote only once",
            ContractErrors::AlreadyPaidThisWindow => "quota already paid this month",
            ContractErrors::QuorumNotReached => "minimum number of votes not reached",
            ContractErrors::AmountExceedsApproved => "amount exceeds the approved amount",
            ContractErrors::InsufficientBalance => "insufficient balance",
            ContractErrors::PaymentFailed => "quota payment failed",
            ContractErrors::TransferFailed => "fund transfer failed",
        }
    }
}

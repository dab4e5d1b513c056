use rust_decimal::Decimal;

use crate::config::Config;
use crate::filter::{Scope, TransactionFilter};
use crate::models::*;
use crate::statement::StatementPeriod;
use crate::store::Store;
use crate::summary::{self, Totals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Accounts,
    Payments,
    Cards,
    Settings,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Dashboard,
            Self::Accounts,
            Self::Payments,
            Self::Cards,
            Self::Settings,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Accounts => write!(f, "Accounts"),
            Self::Payments => write!(f, "Payments"),
            Self::Cards => write!(f, "Cards"),
            Self::Settings => write!(f, "Settings"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeletePayee { id: String, name: String },
    DeleteScheduled { id: String, payee: String },
    ReportCardLost { id: String, name: String },
}

/// Which list on the Payments screen has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaymentsPane {
    Payees,
    Scheduled,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) currency: String,
    pub(crate) recent_limit: usize,
    pub(crate) statement_period: StatementPeriod,

    // Dashboard
    pub(crate) net_worth: Decimal,
    pub(crate) totals: Totals,
    pub(crate) spending_by_category: Vec<(String, Decimal)>,
    /// Latest records paired with the currency of their account.
    pub(crate) recent: Vec<(TransactionRecord, String)>,

    // Accounts and the history of the opened account
    pub(crate) accounts: Vec<Account>,
    pub(crate) account_index: usize,
    pub(crate) account_scroll: usize,
    pub(crate) scope: Scope,
    pub(crate) filter: TransactionFilter,
    pub(crate) transactions: Vec<TransactionRecord>,
    pub(crate) scoped_count: usize,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Payments
    pub(crate) payments_pane: PaymentsPane,
    pub(crate) payees: Vec<Payee>,
    pub(crate) payee_index: usize,
    pub(crate) payee_scroll: usize,
    pub(crate) scheduled: Vec<ScheduledTransaction>,
    pub(crate) scheduled_index: usize,
    pub(crate) scheduled_scroll: usize,

    // Cards
    pub(crate) cards: Vec<Card>,
    pub(crate) card_index: usize,
    pub(crate) card_transactions: Vec<CardTransaction>,
    pub(crate) reveal_number: bool,

    // Settings
    pub(crate) profile: UserProfile,
    pub(crate) prefs: NotificationPrefs,
    pub(crate) notifications: Vec<Notification>,
    pub(crate) notification_index: usize,
    pub(crate) unread: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            currency: config.default_currency.clone(),
            recent_limit: config.recent_limit,
            statement_period: config.statement_period().unwrap_or(StatementPeriod::Last30),

            net_worth: Decimal::ZERO,
            totals: Totals::default(),
            spending_by_category: Vec::new(),
            recent: Vec::new(),

            accounts: Vec::new(),
            account_index: 0,
            account_scroll: 0,
            scope: Scope::None,
            filter: TransactionFilter::default(),
            transactions: Vec::new(),
            scoped_count: 0,
            transaction_index: 0,
            transaction_scroll: 0,

            payments_pane: PaymentsPane::Payees,
            payees: Vec::new(),
            payee_index: 0,
            payee_scroll: 0,
            scheduled: Vec::new(),
            scheduled_index: 0,
            scheduled_scroll: 0,

            cards: Vec::new(),
            card_index: 0,
            card_transactions: Vec::new(),
            reveal_number: false,

            profile: UserProfile::default(),
            prefs: NotificationPrefs::default(),
            notifications: Vec::new(),
            notification_index: 0,
            unread: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn refresh_dashboard(&mut self, store: &Store) {
        self.net_worth = summary::net_worth(store.accounts());
        self.totals = summary::totals(store.records());
        self.spending_by_category = summary::spending_by_category(store.records());
        let all: Vec<&TransactionRecord> = store.records().iter().collect();
        self.recent = summary::recent(&all, self.recent_limit)
            .into_iter()
            .map(|r| (r.clone(), store.currency_of(&r.account_id).to_string()))
            .collect();
        self.unread = store.notifications.unread_count();
    }

    pub(crate) fn refresh_accounts(&mut self, store: &Store) {
        self.accounts = store.accounts().to_vec();
        if self.account_index >= self.accounts.len() {
            self.account_index = self.accounts.len().saturating_sub(1);
        }
        self.refresh_transactions(store);
    }

    /// Re-run the view pipeline for the opened account with the current filter.
    pub(crate) fn refresh_transactions(&mut self, store: &Store) {
        self.scoped_count = crate::filter::scope(store.records(), &self.scope).len();
        self.transactions = store
            .view(&self.scope, &self.filter)
            .into_iter()
            .cloned()
            .collect();
        if self.transaction_index >= self.transactions.len() {
            self.transaction_index = self.transactions.len().saturating_sub(1);
            self.transaction_scroll = self.transaction_scroll.min(self.transaction_index);
        }
    }

    pub(crate) fn refresh_payments(&mut self, store: &Store) {
        self.payees = store.payees.items().to_vec();
        self.scheduled = store.scheduled.items().to_vec();
        if self.payee_index >= self.payees.len() {
            self.payee_index = self.payees.len().saturating_sub(1);
        }
        if self.scheduled_index >= self.scheduled.len() {
            self.scheduled_index = self.scheduled.len().saturating_sub(1);
        }
    }

    pub(crate) fn refresh_cards(&mut self, store: &Store) {
        self.cards = store.cards.cards().to_vec();
        if self.card_index >= self.cards.len() {
            self.card_index = self.cards.len().saturating_sub(1);
        }
        self.card_transactions = self
            .selected_card()
            .map(|c| store.cards.transactions(&c.id).to_vec())
            .unwrap_or_default();
    }

    pub(crate) fn refresh_settings(&mut self, store: &Store) {
        self.profile = store.profile.clone();
        self.prefs = store.prefs.clone();
        self.notifications = store.notifications.items().to_vec();
        self.unread = store.notifications.unread_count();
    }

    pub(crate) fn refresh_all(&mut self, store: &Store) {
        self.refresh_dashboard(store);
        self.refresh_accounts(store);
        self.refresh_payments(store);
        self.refresh_cards(store);
        self.refresh_settings(store);
    }

    /// Scope the history view to an account and start from a clean cursor.
    pub(crate) fn open_account(&mut self, store: &Store, id: AccountId) {
        if let Some(pos) = self.accounts.iter().position(|a| a.id == id) {
            self.account_index = pos;
        }
        self.scope = Scope::Account(id);
        self.transaction_index = 0;
        self.transaction_scroll = 0;
        self.refresh_transactions(store);
    }

    pub(crate) fn opened_account(&self) -> Option<&Account> {
        match &self.scope {
            Scope::Account(id) => Account::find_by_id(&self.accounts, id),
            Scope::None | Scope::All => None,
        }
    }

    pub(crate) fn selected_payee(&self) -> Option<&Payee> {
        self.payees.get(self.payee_index)
    }

    pub(crate) fn selected_scheduled(&self) -> Option<&ScheduledTransaction> {
        self.scheduled.get(self.scheduled_index)
    }

    pub(crate) fn selected_card(&self) -> Option<&Card> {
        self.cards.get(self.card_index)
    }

    /// Rows that fit in a bordered table with a header.
    pub(crate) fn table_page(&self) -> usize {
        self.visible_rows.saturating_sub(3).max(1)
    }

    pub(crate) fn ask_confirm(&mut self, action: PendingAction) {
        self.confirm_message = match &action {
            PendingAction::DeletePayee { name, .. } => format!("Delete payee '{name}'?"),
            PendingAction::DeleteScheduled { payee, .. } => {
                format!("Delete scheduled payment to '{payee}'?")
            }
            PendingAction::ReportCardLost { name, .. } => {
                format!("Report '{name}' lost/stolen? This blocks the card permanently.")
            }
        };
        self.pending_action = Some(action);
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

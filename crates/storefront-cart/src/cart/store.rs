//! Session-scoped cart store.
//!
//! A [`CartProvider`] owns the store for one browsing session. Views never
//! reach the store through a global: they are handed a [`CartHandle`], which
//! stops working once the provider is gone. Every read or mutation through a
//! dead or unbound handle fails with [`CommerceError::CartUnavailable`]
//! instead of falling back to an empty cart.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`); each session owns an
//! independent cart.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::cart::{Cart, CartChange, CartCommand, LineItem};
use crate::error::CommerceError;
use crate::ids::{ProductId, SessionId};
use crate::money::{Currency, Money};
use tracing::{debug, warn};

/// Cart state plus the session it belongs to.
#[derive(Debug, Clone)]
pub struct CartStore {
    session_id: SessionId,
    cart: Cart,
}

impl CartStore {
    /// Create an empty store for a session.
    pub fn new(session_id: SessionId, currency: Currency) -> Self {
        Self {
            session_id,
            cart: Cart::new(currency),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.cart.quantity_of(id)
    }

    /// Apply a command.
    ///
    /// An add priced in a currency other than the cart's is rejected and
    /// leaves the cart untouched; every other command is infallible.
    pub fn dispatch(&mut self, command: CartCommand) -> Result<CartChange, CommerceError> {
        if let CartCommand::AddItem { item } = &command {
            if item.price.currency != self.cart.currency {
                warn!(
                    session = %self.session_id,
                    product_id = %item.id,
                    expected = self.cart.currency.code(),
                    got = item.price.currency.code(),
                    "rejected line item priced in foreign currency"
                );
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.cart.currency.code().to_string(),
                    got: item.price.currency.code().to_string(),
                });
            }
        }
        Ok(self.apply(command))
    }

    fn apply(&mut self, command: CartCommand) -> CartChange {
        let action = command.as_str();
        let product_id = command.product_id().clone();
        let change = self.cart.apply(command);
        debug!(
            session = %self.session_id,
            action,
            product_id = %product_id,
            ?change,
            total_items = self.cart.total_items(),
            "cart command applied"
        );
        change
    }

    /// Add an item, merging by id.
    pub fn add_to_cart(&mut self, item: LineItem) -> Result<CartChange, CommerceError> {
        self.dispatch(CartCommand::add(item))
    }

    pub fn increase_qty(&mut self, id: &ProductId) -> CartChange {
        self.apply(CartCommand::increase(id.clone()))
    }

    pub fn decrease_qty(&mut self, id: &ProductId) -> CartChange {
        self.apply(CartCommand::decrease(id.clone()))
    }

    pub fn remove_item(&mut self, id: &ProductId) -> CartChange {
        self.apply(CartCommand::remove(id.clone()))
    }
}

/// Owner of one session's cart store.
///
/// Dropping the provider ends the session; outstanding handles then fail.
#[derive(Debug)]
pub struct CartProvider {
    session_id: SessionId,
    store: Rc<RefCell<CartStore>>,
}

impl CartProvider {
    /// Start a session with a freshly generated id.
    pub fn new(currency: Currency) -> Self {
        Self::with_session(SessionId::generate(), currency)
    }

    /// Start a session with a known id.
    pub fn with_session(session_id: SessionId, currency: Currency) -> Self {
        debug!(session = %session_id, currency = currency.code(), "cart provider created");
        Self {
            store: Rc::new(RefCell::new(CartStore::new(session_id.clone(), currency))),
            session_id,
        }
    }

    /// A handle for injecting into views.
    pub fn handle(&self) -> CartHandle {
        CartHandle {
            store: Rc::downgrade(&self.store),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Copy of the current cart.
    pub fn snapshot(&self) -> Result<Cart, CommerceError> {
        self.handle().snapshot()
    }
}

impl Drop for CartProvider {
    fn drop(&mut self) {
        let rows = self.store.try_borrow().map(|store| store.cart().len()).ok();
        debug!(session = %self.session_id, ?rows, "cart provider dropped");
    }
}

/// Non-owning reference to a provider's store.
///
/// `CartHandle::default()` is unbound and fails like a handle whose provider
/// has been dropped.
#[derive(Debug, Clone, Default)]
pub struct CartHandle {
    store: Weak<RefCell<CartStore>>,
}

impl CartHandle {
    /// A handle bound to no provider.
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Check whether the provider is still alive.
    pub fn is_bound(&self) -> bool {
        self.store.strong_count() > 0
    }

    fn store(&self) -> Result<Rc<RefCell<CartStore>>, CommerceError> {
        self.store.upgrade().ok_or_else(|| {
            warn!("cart used outside of its provider");
            CommerceError::CartUnavailable
        })
    }

    /// Run a read against the store.
    ///
    /// Fails with [`CommerceError::CartBusy`] when called from inside an
    /// [`update`](Self::update) on the same cart.
    pub fn read<R>(&self, f: impl FnOnce(&CartStore) -> R) -> Result<R, CommerceError> {
        let store = self.store()?;
        let guard = store.try_borrow().map_err(|_| busy())?;
        Ok(f(&guard))
    }

    /// Run a mutation against the store.
    ///
    /// Fails with [`CommerceError::CartBusy`] when called from inside another
    /// `read` or `update` on the same cart.
    pub fn update<R>(&self, f: impl FnOnce(&mut CartStore) -> R) -> Result<R, CommerceError> {
        let store = self.store()?;
        let mut guard = store.try_borrow_mut().map_err(|_| busy())?;
        Ok(f(&mut guard))
    }

    pub fn dispatch(&self, command: CartCommand) -> Result<CartChange, CommerceError> {
        self.update(|store| store.dispatch(command))?
    }

    pub fn add_to_cart(&self, item: LineItem) -> Result<CartChange, CommerceError> {
        self.update(|store| store.add_to_cart(item))?
    }

    pub fn increase_qty(&self, id: &ProductId) -> Result<CartChange, CommerceError> {
        self.update(|store| store.increase_qty(id))
    }

    pub fn decrease_qty(&self, id: &ProductId) -> Result<CartChange, CommerceError> {
        self.update(|store| store.decrease_qty(id))
    }

    pub fn remove_item(&self, id: &ProductId) -> Result<CartChange, CommerceError> {
        self.update(|store| store.remove_item(id))
    }

    pub fn items(&self) -> Result<Vec<LineItem>, CommerceError> {
        self.read(|store| store.items().to_vec())
    }

    pub fn total_items(&self) -> Result<u64, CommerceError> {
        self.read(CartStore::total_items)
    }

    pub fn total_price(&self) -> Result<Money, CommerceError> {
        self.read(CartStore::total_price)
    }

    pub fn quantity_of(&self, id: &ProductId) -> Result<u32, CommerceError> {
        self.read(|store| store.quantity_of(id))
    }

    /// Copy of the current cart.
    pub fn snapshot(&self) -> Result<Cart, CommerceError> {
        self.read(|store| store.cart().clone())
    }
}

fn busy() -> CommerceError {
    warn!("cart reached re-entrantly while already borrowed");
    CommerceError::CartBusy
}

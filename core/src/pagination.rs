//! Gathers the full account collection from the paged List endpoint.
//!
//! # Design
//! Pages are fetched strictly one after another so the result keeps server
//! order and each stop decision can look at the page just read. The walk is
//! best effort: a failed call, a non-200 status or a decode failure ends it
//! and whatever was gathered so far is returned. The cause is logged, not
//! returned.

use tracing::{debug, warn};

use crate::client::AccountClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{AccountList, AccountListItem};

/// Position of the aggregator in the listing. `number` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub number: u64,
    pub size: u64,
}

impl PageCursor {
    pub fn first(size: u64) -> Self {
        Self { number: 0, size }
    }

    pub fn next(self) -> Self {
        Self {
            number: self.number + 1,
            ..self
        }
    }
}

/// Why a page did not contribute to the collection.
#[derive(Debug)]
enum PageError {
    Api(ApiError),
    Status(u16),
}

impl<T: Transport> AccountClient<T> {
    /// Collect every account, `page_size` at a time, in server order.
    ///
    /// Never fails: on the first error, non-200 response or empty page the
    /// accounts gathered so far are returned. A `page_size` of 0 issues no
    /// request and returns nothing.
    pub fn gather_accounts(&self, page_size: u64) -> Vec<AccountListItem> {
        let mut accounts = Vec::new();
        if page_size == 0 {
            warn!("page size 0 cannot page through accounts");
            return accounts;
        }

        let mut cursor = PageCursor::first(page_size);
        loop {
            let page = match self.fetch_page(cursor) {
                Ok(page) => page,
                Err(PageError::Api(e)) => {
                    warn!(page_number = cursor.number, error = %e, "stopped gathering accounts");
                    break;
                }
                Err(PageError::Status(status)) => {
                    warn!(page_number = cursor.number, status, "stopped gathering accounts");
                    break;
                }
            };

            let count = page.data.len() as u64;
            debug!(page_number = cursor.number, count, "gathered page");
            if count == 0 {
                break;
            }
            accounts.extend(page.data);
            if count < cursor.size {
                break;
            }
            cursor = cursor.next();
        }
        accounts
    }

    /// `gather_accounts` with the client's configured page size.
    pub fn gather_all_accounts(&self) -> Vec<AccountListItem> {
        self.gather_accounts(self.page_size())
    }

    fn fetch_page(&self, cursor: PageCursor) -> Result<AccountList, PageError> {
        let response = self
            .list_accounts(cursor.number, cursor.size)
            .map_err(PageError::Api)?;
        if response.status != 200 {
            return Err(PageError::Status(response.status));
        }
        self.parse_list_accounts(response).map_err(PageError::Api)
    }
}

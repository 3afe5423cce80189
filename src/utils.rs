//! Utility functions and types used accross the library

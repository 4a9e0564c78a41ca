/* src/adapter/mem/src/tests/mod.rs */

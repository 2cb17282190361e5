//! TypeScript snippets for common zkverifyjs operations.

/// The only language snippets exist for.
pub const SUPPORTED_LANGUAGE: &str = "typescript";

/// A named SDK operation with its snippet.
#[derive(Debug, Clone, Copy)]
pub struct SdkExample {
    pub operation: &'static str,
    pub summary: &'static str,
    pub code: &'static str,
}

/// Look up an operation, ignoring case and surrounding whitespace.
pub fn find(operation: &str) -> Option<&'static SdkExample> {
    let operation = operation.trim().to_lowercase();
    SDK_EXAMPLES.iter().find(|e| e.operation == operation)
}

/// Operation names in display order.
pub fn operations() -> impl Iterator<Item = &'static str> {
    SDK_EXAMPLES.iter().map(|e| e.operation)
}

pub static SDK_EXAMPLES: [SdkExample; 5] = [
    SdkExample {
        operation: "connect",
        summary: "Connect to zkVerify",
        code: CONNECT,
    },
    SdkExample {
        operation: "submit_proof",
        summary: "Submit a proof",
        code: SUBMIT_PROOF,
    },
    SdkExample {
        operation: "check_status",
        summary: "Check proof verification status",
        code: CHECK_STATUS,
    },
    SdkExample {
        operation: "register_vk",
        summary: "Register a verification key",
        code: REGISTER_VK,
    },
    SdkExample {
        operation: "batch_submit",
        summary: "Submit multiple proofs",
        code: BATCH_SUBMIT,
    },
];

const CONNECT: &str = "✅ TypeScript: Connect to zkVerify

```typescript
import { ZkVerifyClient } from '@zkverify/js-sdk';

// Connect to testnet
const client = new ZkVerifyClient({
  endpoint: 'wss://testnet-rpc.zkverify.io',
  seed: 'your-seed-phrase' // Optional for read-only operations
});

await client.connect();
console.log('✅ Connected to zkVerify testnet!');

// Check connection
const isConnected = client.isConnected();
console.log('Connection status:', isConnected);

// Get chain info
const chainInfo = await client.getChainInfo();
console.log('Chain:', chainInfo.name);
console.log('Block height:', chainInfo.blockHeight);
```

**Notes**:
- Use WebSocket endpoint for real-time updates
- Seed phrase only needed for transactions
- Connection is maintained automatically";

const SUBMIT_PROOF: &str = "✅ TypeScript: Submit a Groth16 Proof

```typescript
import { ZkVerifyClient } from '@zkverify/js-sdk';

// Initialize client
const client = new ZkVerifyClient({
  endpoint: 'wss://testnet-rpc.zkverify.io',
  seed: 'your-seed-phrase' // Required for submission
});

await client.connect();

// Your proof data (from proof generation)
const proof = {
  a: ['0x1234...', '0x5678...'],
  b: [
    ['0x9abc...', '0xdef0...'],
    ['0x1111...', '0x2222...']
  ],
  c: ['0x3333...', '0x4444...']
};

const publicInputs = ['0x5555...'];

// Your verification key
const vk = {
  alpha: ['0x...', '0x...'],
  beta: [['0x...', '0x...'], ['0x...', '0x...']],
  gamma: [['0x...', '0x...'], ['0x...', '0x...']],
  delta: [['0x...', '0x...'], ['0x...', '0x...']],
  ic: [['0x...', '0x...']]
};

// Submit proof
const result = await client.submitProof({
  proofType: 'groth16',
  proof: proof,
  publicInputs: publicInputs,
  vk: vk
});

console.log('✅ Proof submitted!');
console.log('📝 Transaction hash:', result.hash);
console.log('🔍 Proof hash:', result.proofHash);
```

**Important**:
- Ensure proof format matches your proof system
- Public inputs must be in correct order
- VK can be pre-registered (see register_vk)";

const CHECK_STATUS: &str = "✅ TypeScript: Check Proof Verification Status

```typescript
import { ZkVerifyClient } from '@zkverify/js-sdk';

const client = new ZkVerifyClient({
  endpoint: 'wss://testnet-rpc.zkverify.io'
});

await client.connect();

// Check status once
const proofHash = '0x...'; // From submission
const status = await client.getProofStatus(proofHash);

console.log('Proof status:', status.status);
console.log('Verified:', status.verified);
console.log('Block number:', status.blockNumber);

// Watch for real-time updates
console.log('👀 Watching for verification...');

const unsubscribe = client.watchProof(proofHash, (update) => {
  console.log('📊 Status update:', update.status);

  if (update.status === 'verified') {
    console.log('✅ Proof verified successfully!');
    console.log('Block:', update.blockNumber);
    console.log('Timestamp:', update.timestamp);
    unsubscribe(); // Stop watching
  }

  if (update.status === 'failed') {
    console.log('❌ Verification failed:', update.error);
    unsubscribe();
  }
});

// Or wait with timeout
try {
  const verified = await client.waitForVerification(
    proofHash,
    { timeout: 60000 } // 60 seconds
  );
  console.log('✅ Verification result:', verified);
} catch (error) {
  console.log('⏱️ Verification timeout');
}
```

**Status Values**:
- pending: Waiting for inclusion in block
- processing: Being verified
- verified: Successfully verified
- failed: Verification failed";

const REGISTER_VK: &str = "✅ TypeScript: Register Verification Key

```typescript
import { ZkVerifyClient } from '@zkverify/js-sdk';

const client = new ZkVerifyClient({
  endpoint: 'wss://testnet-rpc.zkverify.io',
  seed: 'your-seed-phrase'
});

await client.connect();

// Your verification key
const verificationKey = {
  alpha: ['0x...', '0x...'],
  beta: [['0x...', '0x...'], ['0x...', '0x...']],
  gamma: [['0x...', '0x...'], ['0x...', '0x...']],
  delta: [['0x...', '0x...'], ['0x...', '0x...']],
  ic: [
    ['0x...', '0x...'],
    ['0x...', '0x...']
  ]
};

// Register VK (one-time operation)
const vkHash = await client.registerVK({
  vk: verificationKey,
  proofSystem: 'groth16'
});

console.log('✅ VK registered!');
console.log('🔑 VK Hash:', vkHash);

// Later, submit proofs using VK hash
const result = await client.submitProof({
  proofType: 'groth16',
  proof: myProof,
  publicInputs: myInputs,
  vkHash: vkHash // Use hash instead of full VK
});
```

**Benefits**:
- Register VK once, reuse forever
- Smaller transaction size
- Lower fees for submissions
- Cleaner code";

const BATCH_SUBMIT: &str = "✅ TypeScript: Batch Submit Multiple Proofs

```typescript
import { ZkVerifyClient } from '@zkverify/js-sdk';

const client = new ZkVerifyClient({
  endpoint: 'wss://testnet-rpc.zkverify.io',
  seed: 'your-seed-phrase'
});

await client.connect();

// Prepare multiple proofs
const batch = [
  {
    proofType: 'groth16',
    proof: proof1,
    publicInputs: inputs1,
    vk: vk1
  },
  {
    proofType: 'groth16',
    proof: proof2,
    publicInputs: inputs2,
    vk: vk2
  },
  {
    proofType: 'fflonk',
    proof: proof3,
    publicInputs: inputs3,
    vk: vk3
  }
];

console.log(`📦 Submitting batch of ${batch.length} proofs...`);

// Submit all at once
const results = await client.submitBatch(batch);

console.log('✅ Batch submitted!');
results.forEach((result, index) => {
  console.log(`Proof ${index + 1}:`);
  console.log('  Hash:', result.proofHash);
  console.log('  TX:', result.hash);
});

// Watch all proofs
const proofHashes = results.map(r => r.proofHash);

const statuses = await Promise.all(
  proofHashes.map(hash =>
    client.waitForVerification(hash)
  )
);

console.log('✅ All proofs verified!');
```

**Advantages**:
- Lower fees (amortized costs)
- Single transaction
- Atomic verification
- Faster processing";
